//! Terminal setup and teardown for the TUI.

use std::io;

use crossterm::cursor::Show;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::App;

/// Runs its closure when dropped, on success and error paths alike.
pub struct RestoreOnDrop<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreOnDrop<F> {
    pub fn new(restore: F) -> Self {
        RestoreOnDrop {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Undo raw mode, the alternate screen and mouse capture. Errors are
/// ignored; each step is attempted regardless of the others.
pub fn restore() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show);
}

/// Take over the terminal, run the app, and hand the terminal back.
pub fn run(app: &mut App) -> io::Result<()> {
    // Armed before raw mode so a failure in any setup step still restores
    let _restore = RestoreOnDrop::new(restore);

    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    app.run(&mut terminal)
}
