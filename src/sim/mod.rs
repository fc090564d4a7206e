//! Simulation module
//!
//! All gameplay logic lives here, with no rendering or platform
//! dependencies:
//! - Coins only move in `physics::step`
//! - Score only changes in `hit::pointer_down`
//! - Phase only changes in `tick`

pub mod hit;
pub mod physics;
pub mod pool;
pub mod state;
pub mod tick;

pub use hit::{hit_test, pointer_down};
pub use physics::{step, step_coin};
pub use pool::{backfill, spawn_coin, spawn_initial, top_up};
pub use state::{Coin, GameEvent, GamePhase, GameState};
pub use tick::{award_hit, countdown, dismiss_name_dialog, pause, resume, start};
