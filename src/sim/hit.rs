//! Pointer hit testing

use glam::Vec2;

use super::pool;
use super::state::{Coin, GameState};
use super::tick::award_hit;

/// Index of the front-most coin under `point`, if any
pub fn hit_test(coins: &[Coin], point: Vec2) -> Option<usize> {
    coins.iter().rposition(|coin| coin.contains(point))
}

/// Handle a click in play-field coordinates.
///
/// Removes at most one coin, scores it and backfills. Returns the caught
/// coin's ID. Ignored unless Playing.
pub fn pointer_down(state: &mut GameState, x: f32, y: f32) -> Option<u32> {
    if !state.is_playing() {
        log::debug!("Click at ({x:.1}, {y:.1}) ignored in {:?}", state.phase);
        return None;
    }

    let index = hit_test(&state.coins, Vec2::new(x, y))?;
    let coin = state.coins.remove(index);
    award_hit(state, coin.id);
    pool::backfill(state);
    Some(coin.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::state::GamePhase;

    fn playing_state(coins: &[(f32, f32)]) -> GameState {
        let mut state = GameState::new(11, Settings::default());
        state.phase = GamePhase::Playing;
        for &(x, y) in coins {
            let id = state.next_coin_id();
            state
                .coins
                .push(Coin::new(id, Vec2::new(x, y), Vec2::ZERO, 20.0, 0.1));
        }
        state
    }

    #[test]
    fn test_front_most_wins() {
        let state = playing_state(&[(100.0, 100.0), (110.0, 100.0)]);
        assert_eq!(hit_test(&state.coins, Vec2::new(105.0, 100.0)), Some(1));
        assert_eq!(hit_test(&state.coins, Vec2::new(85.0, 100.0)), Some(0));
        assert_eq!(hit_test(&state.coins, Vec2::new(300.0, 300.0)), None);
    }

    #[test]
    fn test_boundary_is_a_miss() {
        let mut state = playing_state(&[(100.0, 100.0)]);
        assert_eq!(pointer_down(&mut state, 120.0, 100.0), None);
        assert_eq!(state.score, 0);
        assert_eq!(state.coins.len(), 1);
    }

    #[test]
    fn test_single_removal_on_overlap() {
        let mut state = playing_state(&[(100.0, 100.0), (100.0, 100.0), (100.0, 100.0)]);
        let ids: Vec<u32> = state.coins.iter().map(|c| c.id).collect();
        let hit = pointer_down(&mut state, 100.0, 100.0);
        assert_eq!(hit, Some(ids[2]));
        assert_eq!(state.score, 50);
        // Two overlapping coins survive, plus one backfill
        assert_eq!(state.coins.len(), 3);
        assert!(state.coin(ids[0]).is_some());
        assert!(state.coin(ids[1]).is_some());
        assert!(state.coin(ids[2]).is_none());
    }

    #[test]
    fn test_hit_at_ceiling_keeps_count() {
        let mut state = playing_state(&[
            (100.0, 100.0),
            (200.0, 100.0),
            (300.0, 100.0),
            (400.0, 100.0),
            (500.0, 100.0),
        ]);
        assert!(pointer_down(&mut state, 300.0, 100.0).is_some());
        assert_eq!(state.coins.len(), 5);
    }

    #[test]
    fn test_ignored_unless_playing() {
        let mut state = playing_state(&[(100.0, 100.0)]);
        for phase in [GamePhase::Menu, GamePhase::Paused, GamePhase::GameOver] {
            state.phase = phase;
            assert_eq!(pointer_down(&mut state, 100.0, 100.0), None);
            assert_eq!(state.coins.len(), 1);
            assert_eq!(state.score, 0);
        }
    }
}
