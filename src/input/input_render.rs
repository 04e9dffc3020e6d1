//! Search field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

use crate::app::{App, Focus};
use crate::theme;

/// Render the search field and record its area for mouse hit testing
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::InputField;
    let border_color = if focused {
        theme::input::BORDER_FOCUSED
    } else {
        theme::input::BORDER_UNFOCUSED
    };

    let title = Line::from(vec![
        Span::raw(" "),
        Span::styled("⌕", Style::default().fg(border_color)),
        Span::raw(" Search "),
    ]);

    app.input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(Style::default().fg(border_color)),
    );

    // Only show the cursor while the field has focus
    let cursor_style = if focused {
        Style::default().add_modifier(ratatui::style::Modifier::REVERSED)
    } else {
        Style::default()
    };
    app.input.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&app.input.textarea, area);
    app.regions.input = Some(area);
}
