use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Area directly under `anchor`, as wide as the anchor and clipped to `bounds`
pub fn popup_below_anchor(anchor: Rect, height: u16, bounds: Rect) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bounds_bottom = bounds.y.saturating_add(bounds.height);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: anchor.width,
        height: height.min(bounds_bottom.saturating_sub(popup_y)),
    }
}

/// Area in the top-right corner of `frame_area`, one cell in from the edge
pub fn top_right(frame_area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(frame_area.width.saturating_sub(2));
    let popup_height = height.min(frame_area.height);

    Rect {
        x: frame_area.x + frame_area.width.saturating_sub(popup_width + 1),
        y: frame_area.y + 1u16.min(frame_area.height.saturating_sub(popup_height)),
        width: popup_width,
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
