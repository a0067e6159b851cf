//! # Form Module
//!
//! Terminal form for exporting one playlist: token, playlist id and output
//! path inputs, a Browse action that opens a save-as picker over the local
//! file system, and an Export action.
//!
//! The form loop owns all UI state ([`app::App`]). The network fetch runs on a
//! tokio task and reports back through the same event queue as keyboard input
//! ([`event::EventHandler`]), so the form keeps redrawing while pages are
//! downloaded and only the loop ever changes what is displayed. Once the
//! tracks arrive the loop builds the rows and writes the workbook itself.
//!
//! ```text
//! Idle ──submit (all fields set)──▶ Fetching ──Finished(Ok | Err)──▶ Idle + dialog
//!   └──submit (missing field)──▶ Idle + error dialog
//! ```

pub mod app;
pub mod event;
pub mod input;
pub mod picker;
pub mod ui;
pub mod widgets;

use std::io;

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::CrosstermBackend};

pub use app::FormSettings;

use crate::Res;

/// Main entry point for the form.
///
/// Switches the terminal to raw mode on the alternate screen, runs the form
/// until the user quits and restores the terminal, also when the loop fails.
pub async fn run(settings: FormSettings) -> Res<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = app::App::new(settings, event::EventHandler::new());
    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}
