mod combobox_state;
pub mod combobox_render;

pub use combobox_state::{ComboEvent, ComboboxState, Phase, TimerCommand, Transition};
