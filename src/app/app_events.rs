use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::{App, Focus};
use crate::combobox::ComboEvent;
use crate::layout::{Region, region_at};

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        // Ctrl+C: Exit application without output
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Any key acknowledges the current notification
        self.notification.dismiss();

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key, now),
            Focus::Outside => self.handle_outside_key(key, now),
        }
    }

    /// Keys while the search field has focus
    fn handle_input_field_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Down => self.dispatch(ComboEvent::ArrowDown, now),
            KeyCode::Up => self.dispatch(ComboEvent::ArrowUp, now),
            KeyCode::Esc => self.dispatch(ComboEvent::Escape, now),
            KeyCode::Enter => self.dispatch(ComboEvent::Enter, now),
            KeyCode::Tab | KeyCode::BackTab => {}
            _ => {
                if self.input.handle_key(key) {
                    let text = self.input.text().to_string();
                    self.dispatch(ComboEvent::TextChanged(text), now);
                }
            }
        }
    }

    /// Keys while nothing has focus
    fn handle_outside_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('/') | KeyCode::Char('i') | KeyCode::Tab => self.focus_input(now),
            // Enter: Exit and print the current value
            KeyCode::Enter => {
                self.output = Some(self.query().to_string());
                self.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match region_at(&self.regions, mouse.column, mouse.row) {
            Some(Region::InputField) => self.focus_input(now),
            Some(Region::Suggestion(index)) => {
                if let Some(selected) = self.combobox.visible_suggestions().get(index).cloned() {
                    self.dispatch(ComboEvent::SuggestionClicked(selected), now);
                }
                // The field loses focus to whatever was clicked
                self.blur_input(now);
            }
            Some(Region::SuggestionPanel) => {}
            Some(Region::ItemsPane) | None => self.blur_input(now),
        }
    }
}
