//! Session state and core simulation types

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, nothing running
    #[default]
    Menu,
    /// Active gameplay: frame loop and timers armed
    Playing,
    /// Frozen mid-round
    Paused,
    /// Round ended, waiting for name submission or restart
    GameOver,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
        }
    }
}

/// A coin entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec2,
    /// Units per frame
    pub vel: Vec2,
    /// Hit radius (never pulses)
    pub radius: f32,
    pub rotation: f32,
    /// Rotation per frame
    pub spin: f32,
    /// Cosmetic pulse phase
    pub pulse: f32,
}

impl Coin {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32, spin: f32) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            rotation: 0.0,
            spin,
            pulse: 0.0,
        }
    }

    /// Whether a pointer at `point` lands on this coin (strictly inside)
    pub fn contains(&self, point: Vec2) -> bool {
        crate::distance(point, self.pos) < self.radius
    }

    /// Pulsing radius used for drawing only
    pub fn render_radius(&self, amplitude: f32) -> f32 {
        self.radius + amplitude * self.pulse.sin()
    }
}

/// Observable things that happened inside the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    CoinSpawned { id: u32 },
    CoinCaught { id: u32, score: u32 },
    BonusUnlocked { score: u32 },
    /// Countdown went from 1 to 0
    GameOver {
        score: u32,
        high_score: u32,
        new_high_score: bool,
    },
    ScoreSubmitted { rank: Option<usize> },
}

/// The live session
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub phase: GamePhase,
    pub score: u32,
    /// Best score seen by this process
    pub high_score: u32,
    /// Whole seconds left in the round
    pub time_remaining: u32,
    /// Latched once the score reaches the bonus threshold
    pub bonus_unlocked: bool,
    /// Live coins in insertion order (last is front-most)
    pub coins: Vec<Coin>,
    /// Name-entry dialog requested and not yet closed
    pub name_prompt: bool,
    /// Events since the last drain or round start
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    pub fn new(seed: u64, settings: Settings) -> Self {
        let time_remaining = settings.round_seconds;
        Self {
            settings,
            phase: GamePhase::Menu,
            score: 0,
            high_score: 0,
            time_remaining,
            bonus_unlocked: false,
            coins: Vec::new(),
            name_prompt: false,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new coin ID
    pub fn next_coin_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Forget every coin and restart ID allocation
    pub(crate) fn clear_coins(&mut self) {
        self.coins.clear();
        self.next_id = 1;
    }

    pub fn coin(&self, id: u32) -> Option<&Coin> {
        self.coins.iter().find(|c| c.id == id)
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
