//! Session state machine, countdown and scoring
//!
//! Every function here returns whether it changed anything. Commands issued
//! in a phase without a matching transition are ignored, never errors.

use super::pool;
use super::state::{GameEvent, GamePhase, GameState};

/// Begin a fresh round. Valid from Menu, Paused and GameOver.
pub fn start(state: &mut GameState) -> bool {
    if state.phase == GamePhase::Playing {
        log::debug!("Start ignored: already playing");
        return false;
    }

    state.score = 0;
    state.time_remaining = state.settings.round_seconds;
    state.bonus_unlocked = false;
    state.name_prompt = false;
    state.clear_coins();
    if !state.events.is_empty() {
        log::debug!("Discarding {} undrained events", state.events.len());
        state.events.clear();
    }
    state.phase = GamePhase::Playing;
    state.emit(GameEvent::Started);
    pool::spawn_initial(state);

    log::info!(
        "Round started: {}s, {} coins",
        state.time_remaining,
        state.coins.len()
    );
    true
}

pub fn pause(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing {
        log::debug!("Pause ignored in {:?}", state.phase);
        return false;
    }
    state.phase = GamePhase::Paused;
    state.emit(GameEvent::Paused);
    log::info!("Paused with {}s left", state.time_remaining);
    true
}

pub fn resume(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Paused {
        log::debug!("Resume ignored in {:?}", state.phase);
        return false;
    }
    state.phase = GamePhase::Playing;
    state.emit(GameEvent::Resumed);
    log::info!("Resumed with {}s left", state.time_remaining);
    true
}

/// One countdown firing. Returns true when this firing ended the round.
pub fn countdown(state: &mut GameState) -> bool {
    if state.phase != GamePhase::Playing {
        log::trace!("Countdown firing outside of play dropped");
        return false;
    }

    state.time_remaining = state.time_remaining.saturating_sub(1);
    if state.time_remaining == 0 {
        end_round(state);
        return true;
    }
    false
}

/// Playing -> GameOver
fn end_round(state: &mut GameState) {
    let new_high_score = state.score > state.high_score;
    if new_high_score {
        state.high_score = state.score;
    }
    state.phase = GamePhase::GameOver;
    state.name_prompt = true;
    state.emit(GameEvent::GameOver {
        score: state.score,
        high_score: state.high_score,
        new_high_score,
    });
    log::info!(
        "Game over: score {} (best {}){}",
        state.score,
        state.high_score,
        if state.bonus_unlocked { ", coupon unlocked" } else { "" }
    );
}

/// Score a caught coin and latch the bonus
pub fn award_hit(state: &mut GameState, coin_id: u32) {
    state.score = state.score.saturating_add(state.settings.points_per_coin);
    state.emit(GameEvent::CoinCaught {
        id: coin_id,
        score: state.score,
    });
    log::debug!("Caught coin {} -> score {}", coin_id, state.score);

    if !state.bonus_unlocked && state.score >= state.settings.bonus_threshold {
        state.bonus_unlocked = true;
        state.emit(GameEvent::BonusUnlocked { score: state.score });
        log::info!("Coupon unlocked at {}", state.score);
    }
}

/// Close the name dialog without submitting
pub fn dismiss_name_dialog(state: &mut GameState) -> bool {
    std::mem::replace(&mut state.name_prompt, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::hit::pointer_down;
    use proptest::prelude::*;

    fn new_state() -> GameState {
        GameState::new(12345, Settings::default())
    }

    #[test]
    fn test_start_resets_round() {
        let mut state = new_state();
        assert!(start(&mut state));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.coins.len(), 3);
        assert_eq!(state.time_remaining, 60);

        state.score = 450;
        state.bonus_unlocked = true;
        state.time_remaining = 12;
        assert!(pause(&mut state));

        // Start from Paused restarts
        assert!(start(&mut state));
        assert_eq!(state.score, 0);
        assert!(!state.bonus_unlocked);
        assert_eq!(state.time_remaining, 60);
        assert_eq!(state.coins.len(), 3);
        assert_eq!(state.coins[0].id, 1);
    }

    #[test]
    fn test_start_discards_undrained_events() {
        let mut state = new_state();
        start(&mut state);
        state.time_remaining = 1;
        countdown(&mut state);
        assert!(state.events.len() > 1);

        start(&mut state);
        assert_eq!(state.events.first(), Some(&GameEvent::Started));
        assert_eq!(state.events.len(), 1 + state.coins.len());
    }

    #[test]
    fn test_start_ignored_while_playing() {
        let mut state = new_state();
        assert!(start(&mut state));
        state.score = 100;
        assert!(!start(&mut state));
        assert_eq!(state.score, 100);
    }

    #[test]
    fn test_pause_resume() {
        let mut state = new_state();
        assert!(!pause(&mut state));
        assert!(!resume(&mut state));

        start(&mut state);
        assert!(!resume(&mut state));
        assert!(pause(&mut state));
        assert_eq!(state.phase, GamePhase::Paused);
        assert!(!pause(&mut state));
        assert!(resume(&mut state));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_countdown_ends_once() {
        let mut state = new_state();
        start(&mut state);
        state.time_remaining = 2;
        state.score = 1200;
        state.high_score = 500;

        assert!(!countdown(&mut state));
        assert_eq!(state.time_remaining, 1);
        assert!(countdown(&mut state));
        assert_eq!(state.time_remaining, 0);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.high_score, 1200);
        assert!(state.name_prompt);

        // Late firings change nothing
        assert!(!countdown(&mut state));
        assert_eq!(state.time_remaining, 0);
        let game_overs = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_high_score_is_max() {
        let mut state = new_state();
        start(&mut state);
        state.high_score = 900;
        state.score = 300;
        state.time_remaining = 1;
        countdown(&mut state);
        assert_eq!(state.high_score, 900);
        assert!(state.events.contains(&GameEvent::GameOver {
            score: 300,
            high_score: 900,
            new_high_score: false,
        }));
    }

    #[test]
    fn test_countdown_frozen_while_paused() {
        let mut state = new_state();
        start(&mut state);
        pause(&mut state);
        assert!(!countdown(&mut state));
        assert_eq!(state.time_remaining, 60);
    }

    #[test]
    fn test_bonus_latches_once() {
        let mut state = new_state();
        start(&mut state);
        state.score = 900;
        award_hit(&mut state, 1);
        assert!(!state.bonus_unlocked);
        award_hit(&mut state, 2);
        assert_eq!(state.score, 1000);
        assert!(state.bonus_unlocked);
        award_hit(&mut state, 3);

        let unlocks = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::BonusUnlocked { .. }))
            .count();
        assert_eq!(unlocks, 1);
    }

    #[test]
    fn test_dismiss_name_dialog() {
        let mut state = new_state();
        assert!(!dismiss_name_dialog(&mut state));
        state.name_prompt = true;
        assert!(dismiss_name_dialog(&mut state));
        assert!(!state.name_prompt);
    }

    proptest! {
        #[test]
        fn prop_score_multiple_of_fifty(clicks in proptest::collection::vec((0.0f32..800.0, 0.0f32..600.0), 0..200)) {
            let mut state = new_state();
            start(&mut state);
            let mut last = 0;
            for (x, y) in clicks {
                pointer_down(&mut state, x, y);
                prop_assert_eq!(state.score % 50, 0);
                prop_assert!(state.score >= last);
                prop_assert_eq!(state.bonus_unlocked, state.score >= 1000);
                last = state.score;
            }
        }
    }
}
