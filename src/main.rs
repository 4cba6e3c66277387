//! jot - a todo list panel for the terminal.
//!
//! This is the main binary: it sets up logging, loads the configuration and
//! runs the TUI until the user quits.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context;
use jot_config::{Config, files::user_data_dir};
use jot_core::FileStorage;
use jot_tui::{App, terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "JOT_LOG";

/// Filter used when `JOT_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "jot=info,jot_config=info,jot_core=info,jot_tui=info";

/// Sends logs to `jot.log` in the user data directory; the terminal belongs
/// to the TUI.
fn init_logging() -> anyhow::Result<()> {
    let dir = user_data_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let path = dir.join("jot.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Logging is best effort; the panel works without it
    if let Err(err) = init_logging() {
        eprintln!("jot: logging disabled: {err:#}");
    }

    let config = Config::load().context("failed to load configuration")?;
    info!(file = %config.filename, "starting");

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut session = terminal::TerminalSession::start()?;

    let mut app = App::new(&config, FileStorage::new());
    let result = app.run(&mut session);

    // Always restore terminal, even if app.run() failed
    session.finish()?;

    result
}
