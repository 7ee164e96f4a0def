//! Terminal management
//!
//! Raw mode and the alternate screen are entered once at startup and left
//! on every exit path, including a panic.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::{Result, TuiError};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enable raw mode and enter the alternate screen
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().map_err(TuiError::Setup)?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        // Don't leave the shell in raw mode when the screen switch fails
        let _ = disable_raw_mode();
        return Err(TuiError::Setup(e));
    }

    let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(TuiError::Setup)?;
    tracing::debug!("Terminal ready");
    Ok(terminal)
}

/// Hand the screen back to the shell.
///
/// Raw mode is disabled even when leaving the alternate screen fails; the
/// first error is the one reported.
pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    let left = leave_screen(terminal.backend_mut());
    let raw = disable_raw_mode();

    left.and(raw).map_err(TuiError::Restore)?;
    tracing::debug!("Terminal restored");
    Ok(())
}

/// Restore the terminal before the default panic message is printed
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());

        original_hook(panic_info);
    }));
}

/// Leave the alternate screen and show the cursor again
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, cursor::Show)
}
