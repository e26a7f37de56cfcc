//! Terminal takeover and restore.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Leaves the alternate screen, releases the mouse and raw mode, shows the cursor.
///
/// Safe to call repeatedly and when the terminal was never taken over.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)?;
    raw
}

/// Raw mode, alternate screen and mouse capture, restored on drop.
///
/// Dropping runs on every exit path out of the game, including `?` returns
/// and unwinding panics.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Takes over the terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Constructed before the remaining setup so a failure below still restores.
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal taken over");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = restore_terminal(&mut io::stdout()) {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

/// Restores the terminal before the panic message is printed.
///
/// The previously installed hook still runs afterwards.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal(&mut io::stdout());
        default_hook(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_writes_leave_sequences() {
        let mut out = Vec::new();
        restore_terminal(&mut out).expect("restore without raw mode");

        let written = String::from_utf8(out).expect("ansi output");
        assert!(written.contains("\x1b[?1049l"), "leaves alternate screen");
        assert!(written.contains("\x1b[?1000l"), "disables mouse capture");
        assert!(written.contains("\x1b[?25h"), "shows cursor");
    }

    #[test]
    fn test_restore_is_repeatable() {
        let mut out = Vec::new();
        restore_terminal(&mut out).expect("first restore");
        restore_terminal(&mut out).expect("second restore");
    }
}
