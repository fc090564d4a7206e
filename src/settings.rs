//! Game settings and balance
//!
//! Every field falls back to the value in [`crate::consts`], so a settings
//! file only needs the keys it wants to change.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{GameError, Result};

/// Game balance and play field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Round ===
    /// Round length in seconds
    pub round_seconds: u32,
    /// Countdown period (ms)
    pub countdown_interval_ms: f64,

    // === Coin population ===
    pub initial_coins: usize,
    pub max_coins: usize,
    /// Top-up spawn period (ms)
    pub top_up_interval_ms: f64,

    // === Coin motion ===
    pub coin_radius: f32,
    /// Per-axis speed bound (units/frame)
    pub max_coin_speed: f32,
    pub coin_spin: f32,
    pub pulse_step: f32,
    pub pulse_amplitude: f32,

    // === Scoring ===
    pub points_per_coin: u32,
    pub bonus_threshold: u32,

    // === Leaderboard ===
    pub max_high_scores: usize,
    pub max_name_len: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            round_seconds: ROUND_SECONDS,
            countdown_interval_ms: COUNTDOWN_INTERVAL_MS,

            initial_coins: INITIAL_COINS,
            max_coins: MAX_COINS,
            top_up_interval_ms: TOP_UP_INTERVAL_MS,

            coin_radius: COIN_RADIUS,
            max_coin_speed: MAX_COIN_SPEED,
            coin_spin: COIN_SPIN,
            pulse_step: PULSE_STEP,
            pulse_amplitude: PULSE_AMPLITUDE,

            points_per_coin: POINTS_PER_COIN,
            bonus_threshold: BONUS_THRESHOLD,

            max_high_scores: MAX_HIGH_SCORES,
            max_name_len: MAX_NAME_LEN,
        }
    }
}

impl Settings {
    /// Play field size as a vector
    pub fn field(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(GameError::InvalidSettings(msg));

        if !(self.coin_radius.is_finite() && self.coin_radius > 0.0) {
            return invalid(format!("coin_radius must be positive, got {}", self.coin_radius));
        }
        let diameter = self.coin_radius * 2.0;
        if !(self.field_width.is_finite()
            && self.field_height.is_finite()
            && self.field_width > diameter
            && self.field_height > diameter)
        {
            return invalid(format!(
                "field {}x{} must be larger than a coin ({} across)",
                self.field_width, self.field_height, diameter
            ));
        }
        if !(self.max_coin_speed.is_finite() && self.max_coin_speed >= 0.0) {
            return invalid(format!(
                "max_coin_speed must not be negative, got {}",
                self.max_coin_speed
            ));
        }
        if self.round_seconds == 0 {
            return invalid("round_seconds must be at least 1".to_string());
        }
        if self.max_coins == 0 || self.initial_coins > self.max_coins {
            return invalid(format!(
                "need 0 < max_coins and initial_coins <= max_coins, got {} / {}",
                self.initial_coins, self.max_coins
            ));
        }
        if !(self.countdown_interval_ms.is_finite()
            && self.top_up_interval_ms.is_finite()
            && self.countdown_interval_ms > 0.0
            && self.top_up_interval_ms > 0.0)
        {
            return invalid("timer intervals must be positive".to_string());
        }
        if self.max_high_scores == 0 || self.max_name_len == 0 {
            return invalid("leaderboard size and name length must be positive".to_string());
        }
        Ok(())
    }
}
