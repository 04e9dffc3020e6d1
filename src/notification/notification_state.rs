use std::time::{Duration, Instant};

pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq, Eq)]
struct Notification {
    message: String,
    shown_at: Instant,
    duration: Duration,
}

#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_for(message, DEFAULT_NOTIFICATION_DURATION);
    }

    pub fn show_for(&mut self, message: &str, duration: Duration) {
        self.current = Some(Notification {
            message: message.to_string(),
            shown_at: Instant::now(),
            duration,
        });
    }

    /// Current message, dropping it first if it has expired
    pub fn current_message(&mut self, now: Instant) -> Option<&str> {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.shown_at) >= n.duration);
        if expired {
            self.current = None;
        }
        self.current.as_ref().map(|n| n.message.as_str())
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
#[path = "notification_state_tests.rs"]
mod notification_state_tests;
