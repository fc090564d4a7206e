//! Frame loop and periodic timers
//!
//! The scheduler owns no game state. It only answers "which timer firings are
//! due by `now`", stamping each with the generation that armed it. Every
//! `arm`/`cancel` bumps the generation, so firings collected before a phase
//! change can be recognised as stale and dropped by the executor.

use crate::consts::{MAX_COINS, ROUND_SECONDS};
use crate::settings::Settings;

/// Periodic timers, in firing order for equal due times
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TimerKind {
    /// One-second round clock
    Countdown,
    /// Population top-up
    TopUp,
}

/// A single due timer callback
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Firing {
    pub kind: TimerKind,
    pub due_ms: f64,
    pub generation: u64,
}

/// Fixed-period timer with no catch-up across re-arms.
///
/// A single collection yields at most `max_catch_up` firings; periods missed
/// beyond that are skipped.
#[derive(Debug, Clone)]
struct Interval {
    period_ms: f64,
    max_catch_up: usize,
    next_due_ms: Option<f64>,
}

impl Interval {
    fn new(period_ms: f64, max_catch_up: usize) -> Self {
        Self {
            period_ms,
            max_catch_up,
            next_due_ms: None,
        }
    }

    fn arm(&mut self, now_ms: f64) {
        if !(self.period_ms.is_finite() && self.period_ms > 0.0) {
            log::debug!("Interval with period {}ms left disarmed", self.period_ms);
            self.next_due_ms = None;
            return;
        }
        self.next_due_ms = Some(now_ms + self.period_ms);
    }

    fn cancel(&mut self) {
        self.next_due_ms = None;
    }

    fn collect(&mut self, kind: TimerKind, now_ms: f64, generation: u64, out: &mut Vec<Firing>) {
        let mut collected = 0;
        while let Some(due_ms) = self.next_due_ms {
            if due_ms > now_ms {
                break;
            }
            if collected == self.max_catch_up {
                let missed = ((now_ms - due_ms) / self.period_ms).floor() + 1.0;
                log::debug!("{kind:?} skipped {missed} backlogged periods");
                self.next_due_ms = Some(due_ms + missed * self.period_ms);
                break;
            }
            out.push(Firing {
                kind,
                due_ms,
                generation,
            });
            collected += 1;
            self.next_due_ms = Some(due_ms + self.period_ms);
        }
    }
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    generation: u64,
    frame_loop: bool,
    countdown: Interval,
    top_up: Interval,
}

impl Scheduler {
    pub fn new(countdown_ms: f64, top_up_ms: f64) -> Self {
        Self::with_limits(countdown_ms, ROUND_SECONDS as usize, top_up_ms, MAX_COINS)
    }

    /// Timers that deliver at most `countdown_ticks` / `top_ups` firings per
    /// collection. More countdown ticks than a round has, or more top-ups
    /// than the coin ceiling, cannot change anything.
    pub fn with_limits(
        countdown_ms: f64,
        countdown_ticks: usize,
        top_up_ms: f64,
        top_ups: usize,
    ) -> Self {
        Self {
            generation: 0,
            frame_loop: false,
            countdown: Interval::new(countdown_ms, countdown_ticks),
            top_up: Interval::new(top_up_ms, top_ups),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_limits(
            settings.countdown_interval_ms,
            settings.round_seconds as usize,
            settings.top_up_interval_ms,
            settings.max_coins,
        )
    }

    /// Start the frame loop and both timers from `now_ms`.
    /// A non-finite clock is ignored.
    pub fn arm(&mut self, now_ms: f64) {
        if !now_ms.is_finite() {
            log::debug!("Scheduler arm ignored: clock reads {now_ms}");
            return;
        }
        self.generation += 1;
        self.frame_loop = true;
        self.countdown.arm(now_ms);
        self.top_up.arm(now_ms);
        log::trace!("Scheduler armed at {now_ms:.1}ms (generation {})", self.generation);
    }

    /// Stop everything; anything already collected becomes stale
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.frame_loop = false;
        self.countdown.cancel();
        self.top_up.cancel();
        log::trace!("Scheduler cancelled (generation {})", self.generation);
    }

    pub fn is_armed(&self) -> bool {
        self.frame_loop
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, firing: &Firing) -> bool {
        firing.generation == self.generation
    }

    /// All firings due up to and including `now_ms`, oldest first
    pub fn due(&mut self, now_ms: f64) -> Vec<Firing> {
        let mut out = Vec::new();
        if !now_ms.is_finite() {
            log::debug!("Timers not polled: clock reads {now_ms}");
            return out;
        }
        self.countdown
            .collect(TimerKind::Countdown, now_ms, self.generation, &mut out);
        self.top_up
            .collect(TimerKind::TopUp, now_ms, self.generation, &mut out);
        out.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.kind.cmp(&b.kind)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(firings: &[Firing]) -> Vec<TimerKind> {
        firings.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn test_nothing_due_until_armed() {
        let mut scheduler = Scheduler::new(1000.0, 2400.0);
        assert!(!scheduler.is_armed());
        assert!(scheduler.due(1_000_000.0).is_empty());
    }

    #[test]
    fn test_due_in_time_order() {
        let mut scheduler = Scheduler::new(1000.0, 2400.0);
        scheduler.arm(0.0);
        assert!(scheduler.due(999.0).is_empty());

        let firings = scheduler.due(5000.0);
        assert_eq!(
            kinds(&firings),
            vec![
                TimerKind::Countdown, // 1000
                TimerKind::Countdown, // 2000
                TimerKind::TopUp,     // 2400
                TimerKind::Countdown, // 3000
                TimerKind::Countdown, // 4000
                TimerKind::TopUp,     // 4800
                TimerKind::Countdown, // 5000
            ]
        );
        assert!(firings.windows(2).all(|w| w[0].due_ms <= w[1].due_ms));
        assert!(firings.iter().all(|f| scheduler.is_current(f)));

        // Already delivered
        assert!(scheduler.due(5000.0).is_empty());
    }

    #[test]
    fn test_countdown_first_on_tie() {
        let mut scheduler = Scheduler::new(1000.0, 2000.0);
        scheduler.arm(0.0);
        let firings = scheduler.due(2000.0);
        assert_eq!(
            kinds(&firings),
            vec![TimerKind::Countdown, TimerKind::Countdown, TimerKind::TopUp]
        );
    }

    #[test]
    fn test_cancel_invalidates_collected() {
        let mut scheduler = Scheduler::new(1000.0, 2400.0);
        scheduler.arm(0.0);
        let firings = scheduler.due(3000.0);
        scheduler.cancel();
        assert!(!scheduler.is_armed());
        assert!(firings.iter().all(|f| !scheduler.is_current(f)));
        assert!(scheduler.due(100_000.0).is_empty());
    }

    #[test]
    fn test_rearm_starts_fresh() {
        let mut scheduler = Scheduler::new(1000.0, 2400.0);
        scheduler.arm(0.0);
        assert!(scheduler.due(1500.0).len() == 1);
        scheduler.cancel();

        // Resumed much later: the half-second already elapsed is lost
        scheduler.arm(60_000.0);
        assert!(scheduler.due(60_999.0).is_empty());
        let firings = scheduler.due(61_000.0);
        assert_eq!(kinds(&firings), vec![TimerKind::Countdown]);
        assert_eq!(firings[0].due_ms, 61_000.0);
    }

    #[test]
    fn test_non_finite_clock_ignored() {
        let mut scheduler = Scheduler::new(1000.0, 2400.0);
        scheduler.arm(f64::NAN);
        assert!(!scheduler.is_armed());
        assert_eq!(scheduler.generation(), 0);

        scheduler.arm(0.0);
        assert!(scheduler.due(f64::NAN).is_empty());
        assert!(scheduler.due(f64::INFINITY).is_empty());
        assert_eq!(kinds(&scheduler.due(1000.0)), vec![TimerKind::Countdown]);
    }

    #[test]
    fn test_clock_jump_is_bounded() {
        let mut scheduler = Scheduler::with_limits(1000.0, 60, 2400.0, 5);
        scheduler.arm(0.0);
        let firings = scheduler.due(1.0e12);
        let count = |kind| firings.iter().filter(|f| f.kind == kind).count();
        assert_eq!(count(TimerKind::Countdown), 60);
        assert_eq!(count(TimerKind::TopUp), 5);

        // Backlog skipped, timers resume on their period
        assert!(scheduler.due(1.0e12).is_empty());
        let next = scheduler.due(1.0e12 + 2400.0);
        assert!(!next.is_empty());
        assert!(next.iter().all(|f| f.due_ms > 1.0e12));
    }

    #[test]
    fn test_zero_period_never_fires() {
        let mut scheduler = Scheduler::new(0.0, 2400.0);
        scheduler.arm(0.0);
        assert_eq!(kinds(&scheduler.due(5000.0)), vec![TimerKind::TopUp, TimerKind::TopUp]);
    }
}
