//! Colors and modifiers used across the UI

pub mod input {
    use ratatui::style::Color;

    pub const BORDER_FOCUSED: Color = Color::Cyan;
    pub const BORDER_UNFOCUSED: Color = Color::DarkGray;
    pub const PLACEHOLDER: Color = Color::DarkGray;
}

pub mod suggestions {
    use ratatui::style::{Color, Modifier};

    pub const BORDER: Color = Color::Cyan;
    pub const BACKGROUND: Color = Color::Black;
    pub const ITEM_NORMAL_FG: Color = Color::White;
    pub const ITEM_FOCUSED_FG: Color = Color::Black;
    pub const ITEM_FOCUSED_BG: Color = Color::Cyan;
    pub const ITEM_FOCUSED_MODIFIER: Modifier = Modifier::BOLD;
    pub const NO_RESULT: Color = Color::Yellow;
}

pub mod items {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::DarkGray;
    pub const BULLET: Color = Color::Cyan;
    pub const TEXT: Color = Color::Gray;
}

pub mod help {
    use ratatui::style::Color;

    pub const KEY: Color = Color::Cyan;
    pub const DESCRIPTION: Color = Color::DarkGray;
}

pub mod notification {
    use ratatui::style::Color;

    pub const BORDER: Color = Color::Yellow;
    pub const TEXT: Color = Color::Yellow;
    pub const BACKGROUND: Color = Color::Black;
}
