//! Browser binding
//!
//! JS owns the canvas, the dialogs and `requestAnimationFrame`; it forwards
//! clicks and button presses here and calls `frame(now)` once per refresh.
//! The browser event loop already serializes those callbacks.

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::renderer::vertex;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Coin Catcher core loaded");
}

#[wasm_bindgen]
pub struct CoinCatcher {
    game: Game,
}

#[wasm_bindgen]
impl CoinCatcher {
    /// Create a game. `settings_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: &str) -> Result<CoinCatcher, JsError> {
        let settings = if settings_json.trim().is_empty() {
            Settings::default()
        } else {
            Settings::from_json(settings_json)?
        };
        let seed = js_sys::Date::now() as u64;
        log::info!("Game created with seed {}", seed);
        Ok(Self {
            game: Game::new(seed, settings)?,
        })
    }

    pub fn start(&mut self, now: f64) -> bool {
        self.game.start(now)
    }

    pub fn pause(&mut self) -> bool {
        self.game.pause()
    }

    pub fn resume(&mut self, now: f64) -> bool {
        self.game.resume(now)
    }

    #[wasm_bindgen(js_name = submitScore)]
    pub fn submit_score(&mut self, name: &str) -> bool {
        self.game.submit_score(name)
    }

    #[wasm_bindgen(js_name = dismissNameDialog)]
    pub fn dismiss_name_dialog(&mut self) -> bool {
        self.game.dismiss_name_dialog()
    }

    /// Click in canvas-local coordinates; returns the caught coin ID or -1
    #[wasm_bindgen(js_name = onPointerDown)]
    pub fn on_pointer_down(&mut self, x: f32, y: f32) -> i32 {
        self.game
            .pointer_down(x, y)
            .map_or(-1, |id| id as i32)
    }

    /// Advance to `now` and return `[id, x, y, rotation, radius, ...]`.
    /// Empty when the round is not running.
    pub fn frame(&mut self, now: f64) -> Float32Array {
        match self.game.on_display_frame(now) {
            Some(frame) => Float32Array::from(frame.feed().as_slice()),
            None => Float32Array::new_with_length(0),
        }
    }

    /// Triangle list of the latest frame as `[x, y, r, g, b, a, ...]`
    #[wasm_bindgen(js_name = frameVertices)]
    pub fn frame_vertices(&self) -> Float32Array {
        match self.game.frame() {
            Some(frame) => Float32Array::from(vertex::as_floats(&frame.vertices())),
            None => Float32Array::new_with_length(0),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.game.phase().as_str().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.game.score()
    }

    #[wasm_bindgen(getter, js_name = highScore)]
    pub fn high_score(&self) -> u32 {
        self.game.high_score()
    }

    #[wasm_bindgen(getter, js_name = timeRemaining)]
    pub fn time_remaining(&self) -> u32 {
        self.game.time_remaining()
    }

    #[wasm_bindgen(getter, js_name = bonusUnlocked)]
    pub fn bonus_unlocked(&self) -> bool {
        self.game.bonus_unlocked()
    }

    #[wasm_bindgen(getter, js_name = nameDialogOpen)]
    pub fn name_dialog_open(&self) -> bool {
        self.game.name_prompt_open()
    }

    #[wasm_bindgen(js_name = leaderboardJson)]
    pub fn leaderboard_json(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(self.game.leaderboard())?)
    }

    /// Events since the last call, as JSON
    #[wasm_bindgen(js_name = drainEventsJson)]
    pub fn drain_events_json(&mut self) -> Result<String, JsError> {
        Ok(serde_json::to_string(&self.game.drain_events())?)
    }
}
