use std::time::Instant;

use ratatui::{
    Frame,
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::NotificationState;
use crate::theme;
use crate::widgets::popup;

pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    let Some(message) = state.current_message(Instant::now()) else {
        return;
    };

    let width = (message.width() as u16).saturating_add(4);
    let area = popup::top_right(frame.area(), width, 3);

    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(theme::notification::TEXT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(theme::notification::BORDER))
                .style(Style::default().bg(theme::notification::BACKGROUND)),
        );

    popup::clear_area(frame, area);
    frame.render_widget(paragraph, area);
}
