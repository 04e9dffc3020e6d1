use ratatui::layout::Rect;

/// Component under a screen position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    /// A row of the suggestion panel, by index into the suggestion list
    Suggestion(usize),
    /// Panel border or padding
    SuggestionPanel,
    ItemsPane,
}

/// Areas recorded during the last render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input: Option<Rect>,
    pub items: Option<Rect>,
    /// Inner area of the panel (inside the border), one row per suggestion
    pub suggestion_rows: Option<Rect>,
    pub panel: Option<Rect>,
    /// Index of the suggestion drawn on the first row
    pub first_visible: usize,
    /// Number of suggestions drawn
    pub visible_count: usize,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything; called at the start of each frame
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
