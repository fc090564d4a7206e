//! Game executor
//!
//! `Game` is the only owner of the session, the scheduler and the
//! leaderboard. Everything goes through `&mut self`, so commands, clicks,
//! timer firings and frame steps are applied one at a time. Timer firings
//! pass through a FIFO queue and are checked against the scheduler's
//! generation before they touch the session.

use std::collections::VecDeque;

use crate::error::Result;
use crate::highscores::{self, HighScoreEntry, HighScores, Submission};
use crate::renderer::Frame;
use crate::scheduler::{Firing, Scheduler, TimerKind};
use crate::settings::Settings;
use crate::sim::{self, Coin, GameEvent, GamePhase, GameState};

pub struct Game {
    state: GameState,
    scheduler: Scheduler,
    high_scores: HighScores,
    queue: VecDeque<Firing>,
    last_frame: Option<Frame>,
}

impl Game {
    /// Create a game in the menu. Fails if `settings` do not validate.
    pub fn new(seed: u64, settings: Settings) -> Result<Self> {
        settings.validate()?;
        let scheduler = Scheduler::from_settings(&settings);
        let high_scores = HighScores::with_limits(settings.max_high_scores, settings.max_name_len);
        Ok(Self {
            state: GameState::new(seed, settings),
            scheduler,
            high_scores,
            queue: VecDeque::new(),
            last_frame: None,
        })
    }

    // === Commands ===

    /// Start (or restart) a round at clock time `now_ms`
    pub fn start(&mut self, now_ms: f64) -> bool {
        if !now_ms.is_finite() {
            log::debug!("Start ignored: clock reads {now_ms}");
            return false;
        }
        if !sim::start(&mut self.state) {
            return false;
        }
        self.scheduler.arm(now_ms);
        self.last_frame = Some(Frame::capture(&self.state));
        true
    }

    pub fn pause(&mut self) -> bool {
        if !sim::pause(&mut self.state) {
            return false;
        }
        self.scheduler.cancel();
        true
    }

    pub fn resume(&mut self, now_ms: f64) -> bool {
        if !now_ms.is_finite() {
            log::debug!("Resume ignored: clock reads {now_ms}");
            return false;
        }
        if !sim::resume(&mut self.state) {
            return false;
        }
        self.scheduler.arm(now_ms);
        true
    }

    /// Click in play-field coordinates; returns the caught coin's ID
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<u32> {
        sim::pointer_down(&mut self.state, x, y)
    }

    /// Submit the round's score under `name`, dated today
    pub fn submit_score(&mut self, name: &str) -> bool {
        self.submit_score_dated(name, highscores::today())
    }

    /// Submit with an explicit date string.
    ///
    /// Only valid while the name dialog is open. A blank name leaves the
    /// dialog open and the leaderboard untouched.
    pub fn submit_score_dated(&mut self, name: &str, date: String) -> bool {
        if !self.state.name_prompt {
            log::debug!("Score submission ignored: no name dialog open");
            return false;
        }

        let rank = match self.high_scores.submit(
            name,
            self.state.score,
            self.state.bonus_unlocked,
            date,
        ) {
            Submission::Rejected => return false,
            Submission::Ranked(rank) => Some(rank),
            Submission::Dropped => None,
        };

        self.state.name_prompt = false;
        self.state.emit(GameEvent::ScoreSubmitted { rank });
        true
    }

    pub fn dismiss_name_dialog(&mut self) -> bool {
        sim::dismiss_name_dialog(&mut self.state)
    }

    // === Clock ===

    /// Drive the game from the display refresh.
    ///
    /// Applies every timer firing due by `now_ms`, then steps the coins once
    /// if the round is still live. Returns `None` when nothing was stepped,
    /// including when `now_ms` is not a finite clock reading.
    pub fn on_display_frame(&mut self, now_ms: f64) -> Option<&Frame> {
        if !now_ms.is_finite() {
            log::debug!("Display frame ignored: clock reads {now_ms}");
            return None;
        }
        self.run_timers(now_ms);

        if !self.scheduler.is_armed() || !sim::step(&mut self.state) {
            return None;
        }
        self.last_frame = Some(Frame::capture(&self.state));
        self.last_frame.as_ref()
    }

    /// Apply due timer firings without stepping the coins
    pub fn run_timers(&mut self, now_ms: f64) {
        self.queue.extend(self.scheduler.due(now_ms));

        while let Some(firing) = self.queue.pop_front() {
            if !self.scheduler.is_current(&firing) {
                log::trace!("Dropped stale {:?} firing", firing.kind);
                continue;
            }
            self.apply(firing);
        }
    }

    fn apply(&mut self, firing: Firing) {
        match firing.kind {
            TimerKind::Countdown => {
                if sim::countdown(&mut self.state) {
                    self.scheduler.cancel();
                }
            }
            TimerKind::TopUp => {
                sim::top_up(&mut self.state);
            }
        }
    }

    // === Queries ===

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn high_score(&self) -> u32 {
        self.state.high_score
    }

    pub fn time_remaining(&self) -> u32 {
        self.state.time_remaining
    }

    pub fn bonus_unlocked(&self) -> bool {
        self.state.bonus_unlocked
    }

    pub fn name_prompt_open(&self) -> bool {
        self.state.name_prompt
    }

    pub fn coins(&self) -> &[Coin] {
        &self.state.coins
    }

    pub fn leaderboard(&self) -> &[HighScoreEntry] {
        self.high_scores.entries()
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Most recent drawable frame
    pub fn frame(&self) -> Option<&Frame> {
        self.last_frame.as_ref()
    }

    /// Whether the frame loop and timers are running
    pub fn is_running(&self) -> bool {
        self.scheduler.is_armed()
    }

    /// Take all events since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}
