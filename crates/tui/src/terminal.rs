//! Terminal setup and teardown.
//!
//! The panel draws on the alternate screen in raw mode. [`TerminalSession`]
//! restores the terminal when dropped, and [`install_panic_hook`] does the
//! same when the process panics, so the user's shell is never left in raw
//! mode.

use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::warn;

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Enables raw mode, enters the alternate screen and wraps stdout in a
/// Ratatui terminal.
///
/// If a later step fails, raw mode is switched off again before returning.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if any terminal operation fails.
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;

    let attach = || -> io::Result<AppTerminal> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Terminal::new(CrosstermBackend::new(stdout))
    };
    attach().map_err(|err| {
        let _ = disable_raw_mode();
        TerminalError::Setup(err)
    })
}

/// Leaves the alternate screen, disables raw mode and shows the cursor.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if any terminal operation fails.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    Ok(())
}

/// A terminal that is restored when dropped.
///
/// # Examples
///
/// ```no_run
/// use jot_tui::terminal::{self, TerminalSession};
///
/// terminal::install_panic_hook();
/// let mut session = TerminalSession::start()?;
/// session.clear()?;
/// session.finish()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct TerminalSession {
    terminal: AppTerminal,
    restored: bool,
}

impl TerminalSession {
    /// Sets up the terminal.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Setup`] if the terminal cannot be prepared.
    pub fn start() -> Result<Self, TerminalError> {
        Ok(Self {
            terminal: setup_terminal()?,
            restored: false,
        })
    }

    /// Restores the terminal, reporting failures.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::Restore`] if restoring fails.
    pub fn finish(mut self) -> Result<(), TerminalError> {
        self.restored = true;
        restore_terminal(&mut self.terminal)
    }
}

impl Deref for TerminalSession {
    type Target = AppTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if !self.restored {
            if let Err(err) = restore_terminal(&mut self.terminal) {
                warn!(error = %err, "failed to restore terminal");
            }
        }
    }
}

/// Installs a panic hook that restores the terminal before the previous hook
/// prints the panic message.
///
/// Call once at startup, before [`setup_terminal`].
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        original_hook(panic_info);
    }));
}
