use std::time::{Duration, Instant};

use crate::candidates::Candidates;
use crate::combobox::{ComboEvent, ComboboxState, TimerCommand};
use crate::config::ComboboxConfig;
use crate::debounce::Debouncer;
use crate::filter::SuggestionFilter;
use crate::input::InputState;
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;

/// Longest the event loop waits for input when no timer is pending
pub const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Which part of the screen has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    InputField,
    Outside,
}

/// Application state
pub struct App {
    pub input: InputState,
    pub combobox: ComboboxState,
    pub debouncer: Debouncer,
    pub filter: SuggestionFilter,
    pub focus: Focus,
    pub regions: LayoutRegions,
    pub notification: NotificationState,
    pub max_visible: usize,
    /// Value to print on exit (set when the user confirms)
    pub output: Option<String>,
    pub should_quit: bool,
    /// Number of filter evaluations run so far
    pub filter_runs: usize,
}

impl App {
    /// Create a new App with the search field focused and the panel open
    pub fn new(candidates: Candidates, config: &ComboboxConfig) -> Self {
        let mut app = Self {
            input: InputState::new(&config.placeholder),
            combobox: ComboboxState::new(),
            debouncer: Debouncer::new(config.debounce_ms),
            filter: SuggestionFilter::new(candidates),
            focus: Focus::Outside,
            regions: LayoutRegions::new(),
            notification: NotificationState::new(),
            max_visible: config.max_visible,
            output: None,
            should_quit: false,
            filter_runs: 0,
        };
        app.focus_input(Instant::now());
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current value of the search field
    pub fn query(&self) -> &str {
        &self.combobox.query
    }

    pub fn candidates(&self) -> &Candidates {
        self.filter.candidates()
    }

    /// Run one event through the combobox and carry out its side effects
    pub fn dispatch(&mut self, event: ComboEvent, now: Instant) {
        if event == ComboEvent::DebounceFired {
            self.filter_runs += 1;
        }

        let transition = self.combobox.apply(event, &self.filter);

        match transition.timer {
            TimerCommand::Arm => self.debouncer.schedule(now),
            TimerCommand::Cancel => self.debouncer.cancel(),
            TimerCommand::Keep => {}
        }
        if transition.blur {
            self.focus = Focus::Outside;
        }

        self.combobox = transition.state;

        // Keep the text field in step when a selection replaced the value
        if self.input.text() != self.combobox.query {
            log::debug!("Committed {:?}", self.combobox.query);
            let query = self.combobox.query.clone();
            self.input.set_text(&query);
        }
    }

    /// Fire the debounce timer if it is due. Returns true if it fired.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.debouncer.fire_if_due(now) {
            return false;
        }
        self.dispatch(ComboEvent::DebounceFired, now);
        log::debug!(
            "Filter run {} for {:?}: {} suggestions",
            self.filter_runs,
            self.combobox.query,
            self.combobox.suggestions.len()
        );
        true
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.debouncer
            .time_remaining(now)
            .map_or(IDLE_POLL_INTERVAL, |remaining| remaining.min(IDLE_POLL_INTERVAL))
    }

    pub fn focus_input(&mut self, now: Instant) {
        self.focus = Focus::InputField;
        self.dispatch(ComboEvent::Focus, now);
    }

    pub fn blur_input(&mut self, now: Instant) {
        if self.focus == Focus::InputField {
            self.focus = Focus::Outside;
            self.dispatch(ComboEvent::Blur, now);
        }
    }

    /// Release the pending timer before the widget goes away
    pub fn teardown(&mut self) {
        if self.debouncer.is_pending() {
            log::debug!("Cancelling pending filter on teardown");
        }
        self.debouncer.cancel();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
