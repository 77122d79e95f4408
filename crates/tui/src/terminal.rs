//! Raw mode, alternate screen and mouse capture for the board.
//!
//! [`install_panic_hook`] undoes all three on panic, so a crash never leaves
//! the shell unusable.

use std::io::{self, Stdout, Write};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal the board draws on.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal mode switching failures.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Enters raw mode on the alternate screen with mouse capture.
///
/// If a step fails, the steps already taken are undone.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any step fails.
///
/// # Examples
///
/// ```no_run
/// use labboard_tui::terminal;
///
/// # fn main() -> Result<(), terminal::TerminalError> {
/// let mut terminal = terminal::setup_terminal()?;
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok(())
/// # }
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;

    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .and_then(|()| Terminal::new(CrosstermBackend::new(stdout)));
    if entered.is_err() {
        let _ = leave(&mut io::stdout());
    }
    entered.map_err(TerminalError::Setup)
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step is attempted even if an earlier one fails.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] with the first failure.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    let left = leave(terminal.backend_mut());
    let shown = terminal.show_cursor();
    left.and(shown).map_err(TerminalError::Restore)
}

/// Installs a panic hook that restores the terminal before the previous
/// hook prints the panic.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave(&mut io::stdout());
        previous(info);
    }));
}

fn leave(out: &mut impl Write) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, DisableMouseCapture, LeaveAlternateScreen);
    raw.and(screen)
}
