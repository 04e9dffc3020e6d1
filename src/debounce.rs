//! Debounce scheduler for suggestion filtering.
//!
//! Holds at most one pending deadline. Scheduling again replaces it, so only
//! the most recent query is ever evaluated. The event loop polls with
//! [`Debouncer::time_remaining`] as its timeout and calls
//! [`Debouncer::fire_if_due`] after every wake-up.

use std::time::{Duration, Instant};

/// Quiet period between the last keystroke and filtering
pub const DEFAULT_DEBOUNCE_MS: u64 = 800;

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl Debouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer, cancelling any pending deadline
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time until the pending deadline, zero if already due
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Consume the deadline if it has passed.
    ///
    /// Returns true exactly once per armed deadline.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod debounce_tests;
