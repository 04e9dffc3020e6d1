//! Left-hand pane listing every candidate

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
};

use crate::app::App;
use crate::theme;

pub const ITEMS_TITLE: &str = " Items you can search for ";

pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .candidates()
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(" • ", Style::default().fg(theme::items::BULLET)),
                Span::styled(item.as_str(), Style::default().fg(theme::items::TEXT)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(ITEMS_TITLE)
            .border_style(Style::default().fg(theme::items::BORDER)),
    );

    frame.render_widget(list, area);
    app.regions.items = Some(area);
}
