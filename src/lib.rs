//! Coin Catcher - a timed arcade coin-clicking game
//!
//! Core modules:
//! - `sim`: Simulation (coins, physics, hit testing, session state machine)
//! - `scheduler`: Frame loop and periodic timers with generation tokens
//! - `game`: Serialized executor tying the simulation to the clock
//! - `renderer`: Drawable frames and triangle tessellation
//! - `highscores`: Top-10 leaderboard
//! - `settings`: Data-driven game balance

pub mod error;
pub mod game;
pub mod highscores;
pub mod renderer;
pub mod scheduler;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::GameError;
pub use game::Game;
pub use highscores::HighScores;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions (canvas pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Round length in seconds
    pub const ROUND_SECONDS: u32 = 60;

    /// Coins spawned when a round starts
    pub const INITIAL_COINS: usize = 3;
    /// Population ceiling for top-up and backfill
    pub const MAX_COINS: usize = 5;

    /// Hit radius (the original coin is 40 px across)
    pub const COIN_RADIUS: f32 = 20.0;
    /// Per-axis speed bound, units per frame
    pub const MAX_COIN_SPEED: f32 = 2.0;
    /// Spin per frame (radians)
    pub const COIN_SPIN: f32 = 0.1;
    /// Pulse phase advance per frame
    pub const PULSE_STEP: f32 = 0.1;
    /// Render radius oscillation
    pub const PULSE_AMPLITUDE: f32 = 1.5;

    /// Points per caught coin
    pub const POINTS_PER_COIN: u32 = 50;
    /// Score that unlocks the coupon
    pub const BONUS_THRESHOLD: u32 = 1000;

    /// Countdown period (ms)
    pub const COUNTDOWN_INTERVAL_MS: f64 = 1000.0;
    /// Top-up spawn period (ms)
    pub const TOP_UP_INTERVAL_MS: f64 = 2400.0;
    /// Nominal display refresh (used by the headless runner)
    pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

    /// Leaderboard size
    pub const MAX_HIGH_SCORES: usize = 10;
    /// Longest accepted player name (characters)
    pub const MAX_NAME_LEN: usize = 20;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Rotate a vector by `angle` radians
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}
