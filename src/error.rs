//! Error types for the fallible edges of the game (settings files)
//!
//! Gameplay itself never fails: bad input and undefined transitions are
//! ignored in place.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
