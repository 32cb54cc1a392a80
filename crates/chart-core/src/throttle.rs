// File: crates/chart-core/src/throttle.rs
// Summary: Rate limiter that drops events arriving too soon after the last accepted one.

use std::time::{Duration, Instant};

/// Pointer events are accepted at most once per this interval (~24 Hz).
pub const POINTER_THROTTLE: Duration = Duration::from_millis(42);

#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval: Duration,
    last_accepted: Option<Instant>,
}

impl Throttle {
    pub const fn new(interval: Duration) -> Self {
        Self { interval, last_accepted: None }
    }

    pub fn interval(&self) -> Duration { self.interval }

    /// Accept when nothing was accepted yet or `interval` has elapsed since
    /// the last accepted call. Dropped calls leave the state untouched.
    pub fn try_accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.saturating_duration_since(last) < self.interval {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }

    pub fn reset(&mut self) {
        self.last_accepted = None;
    }
}

impl Default for Throttle {
    fn default() -> Self { Self::new(POINTER_THROTTLE) }
}
