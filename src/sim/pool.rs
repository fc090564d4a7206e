//! Coin population control
//!
//! Three growth paths: the initial batch on start, the periodic top-up, and
//! the immediate backfill after a catch. The last two respect the ceiling.

use glam::Vec2;
use rand::Rng;

use super::state::{Coin, GameEvent, GameState};

/// Spawn one coin at a random spot with a random per-axis velocity
pub fn spawn_coin(state: &mut GameState) -> u32 {
    let r = state.settings.coin_radius;
    let field = state.settings.field();
    let speed = state.settings.max_coin_speed;
    let spin = state.settings.coin_spin;

    let pos = Vec2::new(
        state.rng.random_range(r..=field.x - r),
        state.rng.random_range(r..=field.y - r),
    );
    let vel = Vec2::new(
        state.rng.random_range(-speed..=speed),
        state.rng.random_range(-speed..=speed),
    );

    let id = state.next_coin_id();
    state.coins.push(Coin::new(id, pos, vel, r, spin));
    state.emit(GameEvent::CoinSpawned { id });
    log::debug!("Spawned coin {} at ({:.1}, {:.1})", id, pos.x, pos.y);
    id
}

/// Spawn the opening batch
pub fn spawn_initial(state: &mut GameState) {
    for _ in 0..state.settings.initial_coins {
        spawn_coin(state);
    }
}

/// Spawn one coin if below the ceiling
fn spawn_below_ceiling(state: &mut GameState) -> Option<u32> {
    if state.coins.len() < state.settings.max_coins {
        Some(spawn_coin(state))
    } else {
        None
    }
}

/// Periodic top-up
pub fn top_up(state: &mut GameState) -> Option<u32> {
    spawn_below_ceiling(state)
}

/// Replacement right after a catch
pub fn backfill(state: &mut GameState) -> Option<u32> {
    spawn_below_ceiling(state)
}
