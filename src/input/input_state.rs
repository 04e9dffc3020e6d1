use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, Input, TextArea};

use crate::candidates::single_line;
use crate::theme;

/// Single-line text field backing the combobox query
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new(placeholder: &str) -> Self {
        let mut textarea = TextArea::default();

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        textarea.set_placeholder_text(placeholder);
        textarea.set_placeholder_style(Style::default().fg(theme::input::PLACEHOLDER));

        Self { textarea }
    }

    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Replace the whole value and put the cursor at the end.
    /// Line breaks in `text` become spaces.
    pub fn set_text(&mut self, text: &str) {
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.move_cursor(CursorMove::Top);
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(single_line(text));
    }

    /// Feed an editing key to the field. Returns true if the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if inserts_newline(&key) {
            return false;
        }
        self.textarea.input(Input::from(key))
    }
}

fn inserts_newline(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PLACEHOLDER)
    }
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;
