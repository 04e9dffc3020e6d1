//! Search-as-you-type combobox for the terminal.
//!
//! The combobox itself ([`combobox::ComboboxState`]) is a plain state record
//! with a pure transition per event; [`app::App`] hosts it in a ratatui
//! terminal UI with a debounce timer, mouse hit testing and rendering.

pub mod app;
pub mod candidates;
pub mod combobox;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod help_line;
pub mod input;
pub mod layout;
pub mod logging;
pub mod notification;
pub mod terminal;
pub mod theme;
pub mod widgets;
