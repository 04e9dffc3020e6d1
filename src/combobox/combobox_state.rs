//! Combobox state machine
//!
//! The stored state is a plain record. Every event goes through
//! [`ComboboxState::apply`], which returns the next record together with the
//! side effects the host has to carry out (timer and focus). Nothing here
//! knows about terminals or clocks.

use crate::filter::SuggestionFilter;

/// Stored combobox state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComboboxState {
    pub query: String,
    pub suggestions: Vec<String>,
    pub focused_index: usize,
    pub is_open: bool,
}

/// Inputs the combobox reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboEvent {
    Focus,
    Blur,
    TextChanged(String),
    DebounceFired,
    ArrowDown,
    ArrowUp,
    Escape,
    Enter,
    SuggestionClicked(String),
}

/// What the host should do with the debounce timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Keep,
    Arm,
    Cancel,
}

/// Result of applying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ComboboxState,
    pub timer: TimerCommand,
    /// The text field should lose focus
    pub blur: bool,
}

impl Transition {
    fn new(state: ComboboxState) -> Self {
        Self {
            state,
            timer: TimerCommand::Keep,
            blur: false,
        }
    }

    fn timer(mut self, timer: TimerCommand) -> Self {
        self.timer = timer;
        self
    }

    fn blur(mut self) -> Self {
        self.blur = true;
        self
    }
}

/// Derived view over the stored state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    OpenNoQuery,
    OpenWithSuggestions,
    OpenNoResults,
}

impl ComboboxState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event and return the next state with its side effects
    pub fn apply(&self, event: ComboEvent, filter: &SuggestionFilter) -> Transition {
        let mut next = self.clone();

        match event {
            ComboEvent::Focus => {
                next.is_open = true;
                Transition::new(next)
            }

            ComboEvent::Blur => Transition::new(next),

            ComboEvent::TextChanged(query) => {
                next.query = query;
                // Filtering is suspended while the panel is closed
                let timer = if self.is_open {
                    TimerCommand::Arm
                } else {
                    TimerCommand::Cancel
                };
                Transition::new(next).timer(timer)
            }

            ComboEvent::DebounceFired => {
                if self.is_open {
                    next.suggestions = filter.suggestions(&self.query);
                    next.focused_index = 0;
                }
                Transition::new(next)
            }

            ComboEvent::ArrowDown => {
                let len = self.suggestions.len();
                if len > 0 {
                    next.focused_index = if self.focused_index + 1 >= len {
                        0
                    } else {
                        self.focused_index + 1
                    };
                }
                Transition::new(next)
            }

            ComboEvent::ArrowUp => {
                let len = self.suggestions.len();
                if len > 0 {
                    next.focused_index = if self.focused_index == 0 || self.focused_index >= len {
                        len - 1
                    } else {
                        self.focused_index - 1
                    };
                }
                Transition::new(next)
            }

            // Escape only dismisses; it never commits the focused suggestion
            ComboEvent::Escape => {
                next.focused_index = 0;
                next.is_open = false;
                Transition::new(next).timer(TimerCommand::Cancel).blur()
            }

            ComboEvent::Enter => {
                if let Some(selected) = self.focused_suggestion() {
                    next.query = selected.to_string();
                }
                next.is_open = false;
                Transition::new(next).timer(TimerCommand::Cancel).blur()
            }

            ComboEvent::SuggestionClicked(selected) => {
                next.query = selected;
                next.is_open = false;
                Transition::new(next).timer(TimerCommand::Cancel)
            }
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.is_open {
            Phase::Closed
        } else if !self.suggestions.is_empty() {
            Phase::OpenWithSuggestions
        } else if self.query.is_empty() {
            Phase::OpenNoQuery
        } else {
            Phase::OpenNoResults
        }
    }

    /// Suggestions the panel should display; empty means no panel
    pub fn visible_suggestions(&self) -> &[String] {
        if self.is_open {
            self.suggestions.as_slice()
        } else {
            &[]
        }
    }

    pub fn shows_panel(&self) -> bool {
        !self.visible_suggestions().is_empty()
    }

    /// Whether the "No result found" notice is displayed
    pub fn shows_no_result(&self) -> bool {
        !self.query.is_empty() && self.suggestions.is_empty()
    }

    pub fn focused_suggestion(&self) -> Option<&str> {
        self.suggestions.get(self.focused_index).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "combobox_state_tests.rs"]
mod combobox_state_tests;
