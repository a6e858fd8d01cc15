// SPDX-License-Identifier: MPL-2.0
//! Per-toast dismissal countdown.
//!
//! The timer is a plain state machine advanced by the caller's clock: every
//! transition takes the current `Instant`, which keeps the lifecycle
//! deterministic under test and lets the provider drive all timers from a
//! single tick subscription.
//!
//! ```text
//! Idle --start--> Visible --(duration)--> Exiting --(settle delay)--> Settled
//!   \________________dismiss________________/^
//! ```
//!
//! The timer is owned by its presentation unit. Dropping the unit drops the
//! timer, so a removed toast can never be closed a second time.

use crate::config::SETTLE_DELAY_MS;
use std::time::{Duration, Instant};

/// Lifecycle phase of a dismissal timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created but not yet mounted.
    Idle,
    /// On screen since `since`; expires at `since + duration`.
    Visible { since: Instant },
    /// Exit animation started at `since`; settles at `since + settle_delay`.
    Exiting { since: Instant },
    /// Exit finished; the owner should be removed.
    Settled,
}

/// Transition reported by [`DismissalTimer::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The auto-dismiss duration elapsed; the exit animation begins.
    Expired,
    /// The settle delay elapsed after the exit began.
    Settled,
}

#[derive(Debug, Clone)]
pub struct DismissalTimer {
    duration: Duration,
    settle_delay: Duration,
    phase: Phase,
}

impl DismissalTimer {
    /// Creates an idle timer with the standard 300 ms settle delay.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self::with_settle_delay(duration, Duration::from_millis(SETTLE_DELAY_MS))
    }

    #[must_use]
    pub fn with_settle_delay(duration: Duration, settle_delay: Duration) -> Self {
        Self {
            duration,
            settle_delay,
            phase: Phase::Idle,
        }
    }

    /// Starts the countdown. Returns `false` if it was already started.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.phase == Phase::Idle {
            self.phase = Phase::Visible { since: now };
            true
        } else {
            false
        }
    }

    /// Advances the timer to `now`.
    ///
    /// Deadlines derive from scheduled times rather than poll times, so a late
    /// poll never stretches the settle delay. A poll that crosses both
    /// deadlines reports only [`TimerEvent::Settled`].
    pub fn poll(&mut self, now: Instant) -> Option<TimerEvent> {
        match self.phase {
            Phase::Idle | Phase::Settled => None,
            Phase::Visible { since } => {
                let deadline = since + self.duration;
                if now < deadline {
                    return None;
                }
                self.phase = Phase::Exiting { since: deadline };
                if now >= deadline + self.settle_delay {
                    self.phase = Phase::Settled;
                    Some(TimerEvent::Settled)
                } else {
                    Some(TimerEvent::Expired)
                }
            }
            Phase::Exiting { since } => {
                if now >= since + self.settle_delay {
                    self.phase = Phase::Settled;
                    Some(TimerEvent::Settled)
                } else {
                    None
                }
            }
        }
    }

    /// Begins the exit immediately, whatever time was left.
    ///
    /// Returns `false` when the exit had already begun.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Idle | Phase::Visible { .. } => {
                self.phase = Phase::Exiting { since: now };
                true
            }
            Phase::Exiting { .. } | Phase::Settled => false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Visible { .. })
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != Phase::Idle
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// When the auto-dismiss fires, if the timer is counting down.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        match self.phase {
            Phase::Visible { since } => Some(since + self.duration),
            _ => None,
        }
    }

    /// When the owner will settle, if that is already scheduled.
    #[must_use]
    pub fn settles_at(&self) -> Option<Instant> {
        match self.phase {
            Phase::Visible { since } => Some(since + self.duration + self.settle_delay),
            Phase::Exiting { since } => Some(since + self.settle_delay),
            Phase::Idle | Phase::Settled => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn idle_timer_never_fires() {
        let t0 = Instant::now();
        let mut timer = DismissalTimer::new(ms(100));

        assert_eq!(timer.poll(t0 + ms(10_000)), None);
        assert_eq!(timer.phase(), Phase::Idle);
    }

    #[test]
    fn expires_after_duration_then_settles_after_delay() {
        let t0 = Instant::now();
        let mut timer = DismissalTimer::new(ms(4000));
        assert!(timer.start(t0));

        assert_eq!(timer.poll(t0 + ms(3999)), None);
        assert!(timer.is_visible());

        assert_eq!(timer.poll(t0 + ms(4000)), Some(TimerEvent::Expired));
        assert!(!timer.is_visible());

        assert_eq!(timer.poll(t0 + ms(4299)), None);
        assert_eq!(timer.poll(t0 + ms(4300)), Some(TimerEvent::Settled));
        assert_eq!(timer.phase(), Phase::Settled);
    }

    #[test]
    fn each_event_fires_once() {
        let t0 = Instant::now();
        let mut timer = DismissalTimer::new(ms(100));
        timer.start(t0);

        assert_eq!(timer.poll(t0 + ms(150)), Some(TimerEvent::Expired));
        assert_eq!(timer.poll(t0 + ms(160)), None);
        assert_eq!(timer.poll(t0 + ms(400)), Some(TimerEvent::Settled));
        assert_eq!(timer.poll(t0 + ms(900)), None);
    }

    #[test]
    fn late_poll_does_not_stretch_settle_delay() {
        let t0 = Instant::now();
        let mut timer = DismissalTimer::new(ms(1000));
        timer.start(t0);

        // First poll arrives 250 ms after the deadline.
        assert_eq!(timer.poll(t0 + ms(1250)), Some(TimerEvent::Expired));
        assert_eq!(timer.settles_at(), Some(t0 + ms(1300)));
        assert_eq!(timer.poll(t0 + ms(1300)), Some(TimerEvent::Settled));
    }

    #[test]
    fn poll_crossing_both_deadlines_reports_settled() {
        let t0 = Instant::now();
        let mut timer = DismissalTimer::new(ms(1000));
        timer.start(t0);

        assert_eq!(timer.poll(t0 + ms(5000)), Some(TimerEvent::Settled));
    }

    #[test]
    fn dismiss_settles_after_delay_regardless_of_remaining_time() {
        let t0 = Instant::now();
        let mut timer = DismissalTimer::new(ms(60_000));
        timer.start(t0);

        let pressed = t0 + ms(500);
        assert!(timer.dismiss(pressed));
        assert!(!timer.is_visible());
        assert_eq!(timer.expires_at(), None);

        assert_eq!(timer.poll(pressed + ms(299)), None);
        assert_eq!(timer.poll(pressed + ms(300)), Some(TimerEvent::Settled));
    }

    #[test]
    fn dismiss_twice_keeps_first_exit_time() {
        let t0 = Instant::now();
        let mut timer = DismissalTimer::new(ms(60_000));
        timer.start(t0);

        assert!(timer.dismiss(t0 + ms(100)));
        assert!(!timer.dismiss(t0 + ms(250)));
        assert_eq!(timer.settles_at(), Some(t0 + ms(400)));
    }

    #[test]
    fn dismiss_before_start_still_settles() {
        let t0 = Instant::now();
        let mut timer = DismissalTimer::new(ms(4000));

        assert!(timer.dismiss(t0));
        assert!(!timer.start(t0));
        assert_eq!(timer.poll(t0 + ms(300)), Some(TimerEvent::Settled));
    }

    #[test]
    fn start_is_idempotent() {
        let t0 = Instant::now();
        let mut timer = DismissalTimer::new(ms(1000));

        assert!(timer.start(t0));
        assert!(!timer.start(t0 + ms(500)));
        assert_eq!(timer.expires_at(), Some(t0 + ms(1000)));
    }
}
