use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::notification::render_notification;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.regions.clear();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(frame.area());

        // Candidate list on the left, combobox on the right
        let [items_area, combo_area] =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
                .areas(main_area);

        let [input_area, _] =
            Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(combo_area);

        crate::candidates::candidates_render::render_pane(self, frame, items_area);
        crate::input::input_render::render_field(self, frame, input_area);
        crate::combobox::combobox_render::render_no_result(self, frame, input_area, combo_area);
        crate::combobox::combobox_render::render_panel(self, frame, input_area, combo_area);
        crate::help_line::render_line(self, frame, help_area);

        render_notification(frame, &mut self.notification);
    }
}
