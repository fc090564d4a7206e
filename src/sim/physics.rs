//! Per-frame coin motion
//!
//! One call advances every coin by exactly one display frame. Walls reflect
//! velocity instead of clamping position, so a coin may sit up to one frame of
//! travel past the radius margin before it turns around.

use glam::Vec2;

use super::state::{Coin, GameState};

/// Advance a single coin one frame inside a `field`-sized box
pub fn step_coin(coin: &mut Coin, field: Vec2, pulse_step: f32) {
    coin.pos += coin.vel;

    let r = coin.radius;
    if coin.pos.x <= r || coin.pos.x >= field.x - r {
        coin.vel.x = -coin.vel.x;
    }
    if coin.pos.y <= r || coin.pos.y >= field.y - r {
        coin.vel.y = -coin.vel.y;
    }

    coin.rotation += coin.spin;
    coin.pulse += pulse_step;
}

/// Advance every coin one frame. Does nothing outside of Playing.
pub fn step(state: &mut GameState) -> bool {
    if !state.is_playing() {
        return false;
    }

    let field = state.settings.field();
    let pulse_step = state.settings.pulse_step;
    for coin in &mut state.coins {
        step_coin(coin, field, pulse_step);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::GamePhase;
    use proptest::prelude::*;

    const FIELD: Vec2 = Vec2::new(800.0, 600.0);

    #[test]
    fn test_euler_step() {
        let mut coin = Coin::new(1, Vec2::new(100.0, 100.0), Vec2::new(1.5, -0.5), 20.0, 0.1);
        step_coin(&mut coin, FIELD, 0.1);
        assert_eq!(coin.pos, Vec2::new(101.5, 99.5));
        assert_eq!(coin.vel, Vec2::new(1.5, -0.5));
        assert!((coin.rotation - 0.1).abs() < 1e-6);
        assert!((coin.pulse - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_reflects_off_left_wall_after_overshoot() {
        let mut coin = Coin::new(1, Vec2::new(21.0, 300.0), Vec2::new(-2.0, 0.0), 20.0, 0.1);
        step_coin(&mut coin, FIELD, 0.1);
        // Overshoots the margin by a frame, then turns around
        assert_eq!(coin.pos.x, 19.0);
        assert_eq!(coin.vel.x, 2.0);
        step_coin(&mut coin, FIELD, 0.1);
        assert_eq!(coin.pos.x, 21.0);
        assert_eq!(coin.vel.x, 2.0);
    }

    #[test]
    fn test_reflects_axes_independently() {
        let mut coin = Coin::new(1, Vec2::new(779.0, 300.0), Vec2::new(2.0, 1.0), 20.0, 0.1);
        step_coin(&mut coin, FIELD, 0.1);
        assert_eq!(coin.vel, Vec2::new(-2.0, 1.0));

        let mut coin = Coin::new(2, Vec2::new(400.0, 579.0), Vec2::new(1.0, 2.0), 20.0, 0.1);
        step_coin(&mut coin, FIELD, 0.1);
        assert_eq!(coin.vel, Vec2::new(1.0, -2.0));
    }

    #[test]
    fn test_step_only_while_playing() {
        let mut state = GameState::new(3, Settings::default());
        state
            .coins
            .push(Coin::new(1, Vec2::new(100.0, 100.0), Vec2::new(1.0, 1.0), 20.0, 0.1));

        for phase in [GamePhase::Menu, GamePhase::Paused, GamePhase::GameOver] {
            state.phase = phase;
            assert!(!step(&mut state));
            assert_eq!(state.coins[0].pos, Vec2::new(100.0, 100.0));
        }

        state.phase = GamePhase::Playing;
        assert!(step(&mut state));
        assert_eq!(state.coins[0].pos, Vec2::new(101.0, 101.0));
    }

    proptest! {
        #[test]
        fn prop_coins_stay_in_field(
            x in 20.0f32..=780.0,
            y in 20.0f32..=580.0,
            vx in -2.0f32..=2.0,
            vy in -2.0f32..=2.0,
            frames in 1usize..3000,
        ) {
            let mut coin = Coin::new(1, Vec2::new(x, y), Vec2::new(vx, vy), 20.0, 0.1);
            let start_rotation = coin.rotation;
            for _ in 0..frames {
                step_coin(&mut coin, FIELD, 0.1);
                // At most one frame of travel past the margin
                prop_assert!(coin.pos.x >= 20.0 - vx.abs() - 1e-2);
                prop_assert!(coin.pos.x <= 780.0 + vx.abs() + 1e-2);
                prop_assert!(coin.pos.y >= 20.0 - vy.abs() - 1e-2);
                prop_assert!(coin.pos.y <= 580.0 + vy.abs() + 1e-2);
                prop_assert_eq!(coin.vel.x.abs(), vx.abs());
                prop_assert_eq!(coin.vel.y.abs(), vy.abs());
            }
            prop_assert!(coin.rotation > start_rotation);
        }
    }
}
