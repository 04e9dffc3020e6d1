//! One-line key reference at the bottom of the screen

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, Focus};
use crate::theme;

const INPUT_FIELD_KEYS: &[(&str, &str)] = &[
    ("↑↓", "navigate"),
    ("Enter", "select"),
    ("Esc", "close"),
    ("Ctrl+C", "quit"),
];

const OUTSIDE_KEYS: &[(&str, &str)] = &[
    ("/", "search"),
    ("Enter", "print & exit"),
    ("q", "quit"),
];

pub fn keys_for(focus: Focus) -> &'static [(&'static str, &'static str)] {
    match focus {
        Focus::InputField => INPUT_FIELD_KEYS,
        Focus::Outside => OUTSIDE_KEYS,
    }
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, (key, description)) in keys_for(app.focus).iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(*key, Style::default().fg(theme::help::KEY)));
        spans.push(Span::styled(
            format!(" {}", description),
            Style::default().fg(theme::help::DESCRIPTION),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
