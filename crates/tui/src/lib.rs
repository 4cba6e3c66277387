//! Terminal UI for jot.
//!
//! This crate hosts the checklist controller from `jot-core` in a
//! Ratatui-based panel: it maps keys to actions, carries out the requests
//! the controller hands back (editing, opening the file, help), reloads the
//! file periodically, and draws the list.
//!
//! # Overview
//!
//! - [`app`]: Main application struct and run loop
//! - [`event`]: Event polling and key mappings
//! - [`message`]: Messages consumed by the update loop
//! - [`editor`]: Single-line item editor state
//! - [`view`]: The renderer snapshot drawn each frame
//! - [`notice`]: Status bar messages
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`widgets`]: Rendering functions
//!
//! # Example
//!
//! ```no_run
//! use jot_config::Config;
//! use jot_core::FileStorage;
//! use jot_tui::{App, terminal::{self, TerminalSession}};
//!
//! fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let config = Config::load()?;
//!
//!     let mut session = TerminalSession::start()?;
//!     let mut app = App::new(&config, FileStorage::new());
//!     let result = app.run(&mut session);
//!
//!     session.finish()?;
//!     result
//! }
//! ```

pub mod app;
pub mod editor;
pub mod event;
pub mod layout;
pub mod message;
pub mod notice;
pub mod terminal;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::{App, Panel};
pub use message::Message;
pub use notice::{Notice, NoticeLevel};
