//! Terminal session setup and restore

use std::io::stdout;

use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

/// Run `body` inside a raw-mode, alternate-screen session with mouse capture.
///
/// The terminal is restored on every path, including when enabling mouse
/// capture or `body` fails.
pub fn session<T>(body: impl FnOnce(DefaultTerminal) -> Result<T>) -> Result<T> {
    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    with_cleanup(
        || Ok(execute!(stdout(), EnableMouseCapture)?),
        || body(terminal),
        || {
            let disabled = execute!(stdout(), DisableMouseCapture);
            ratatui::restore();
            Ok(disabled?)
        },
    )
}

/// Run `setup`, then `body` if setup succeeded, then `cleanup` regardless.
/// The first error wins.
pub fn with_cleanup<T, E>(
    setup: impl FnOnce() -> Result<(), E>,
    body: impl FnOnce() -> Result<T, E>,
    cleanup: impl FnOnce() -> Result<(), E>,
) -> Result<T, E> {
    let result = setup().and_then(|()| body());
    let cleaned = cleanup();
    let value = result?;
    cleaned?;
    Ok(value)
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod terminal_tests;
