//! Suggestion panel rendering
//!
//! Draws the dropdown under the search field, or the "No result found"
//! notice when a query matched nothing.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::app::App;
use crate::theme;
use crate::widgets::popup;

pub const NO_RESULT_TEXT: &str = "No result found";
const PANEL_BORDER_HEIGHT: u16 = 2;

/// First suggestion index to draw so the focused row stays on screen
pub fn first_visible_index(focused: usize, len: usize, rows: usize) -> usize {
    if rows == 0 || len <= rows {
        return 0;
    }
    let focused = focused.min(len - 1);
    if focused < rows {
        0
    } else {
        focused + 1 - rows
    }
}

/// Render the suggestion panel below `input_area`, clipped to `bounds`
pub fn render_panel(app: &mut App, frame: &mut Frame, input_area: Rect, bounds: Rect) {
    if !app.combobox.shows_panel() {
        return;
    }
    let suggestions = app.combobox.visible_suggestions();

    let max_visible = app.max_visible.max(1);
    let wanted_rows = u16::try_from(suggestions.len().min(max_visible)).unwrap_or(u16::MAX);
    let panel_area = popup::popup_below_anchor(
        input_area,
        wanted_rows.saturating_add(PANEL_BORDER_HEIGHT),
        bounds,
    );
    if panel_area.height <= PANEL_BORDER_HEIGHT {
        return;
    }

    let rows = (panel_area.height - PANEL_BORDER_HEIGHT) as usize;
    let focused = app.combobox.focused_index;
    let first = first_visible_index(focused, suggestions.len(), rows);

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .skip(first)
        .take(rows)
        .map(|(i, suggestion)| {
            let line = if i == focused {
                Line::from(Span::styled(
                    format!("► {}", suggestion),
                    Style::default()
                        .fg(theme::suggestions::ITEM_FOCUSED_FG)
                        .bg(theme::suggestions::ITEM_FOCUSED_BG)
                        .add_modifier(theme::suggestions::ITEM_FOCUSED_MODIFIER),
                ))
            } else {
                Line::from(Span::styled(
                    format!("  {}", suggestion),
                    Style::default().fg(theme::suggestions::ITEM_NORMAL_FG),
                ))
            };
            ListItem::new(line)
        })
        .collect();
    let visible_count = items.len();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, panel_area);

    let title = format!(" {} ", suggestions.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title)
            .border_style(Style::default().fg(theme::suggestions::BORDER))
            .style(Style::default().bg(theme::suggestions::BACKGROUND)),
    );
    frame.render_widget(list, panel_area);

    app.regions.panel = Some(panel_area);
    app.regions.suggestion_rows = Some(Rect {
        x: panel_area.x + 1,
        y: panel_area.y + 1,
        width: panel_area.width.saturating_sub(2),
        height: panel_area.height - PANEL_BORDER_HEIGHT,
    });
    app.regions.first_visible = first;
    app.regions.visible_count = visible_count;
}

/// Render the "No result found" line below `input_area`
pub fn render_no_result(app: &App, frame: &mut Frame, input_area: Rect, bounds: Rect) {
    if !app.combobox.shows_no_result() {
        return;
    }

    let area = popup::popup_below_anchor(input_area, 1, bounds);
    if area.height == 0 {
        return;
    }

    let notice = Paragraph::new(Line::from(Span::styled(
        format!(" {}", NO_RESULT_TEXT),
        Style::default().fg(theme::suggestions::NO_RESULT),
    )));
    frame.render_widget(notice, area);
}

#[cfg(test)]
#[path = "combobox_render_tests.rs"]
mod combobox_render_tests;
