//! Widget components for the jot TUI.
//!
//! Each widget is a plain function rendering borrowed state into a
//! [`Buffer`](ratatui::buffer::Buffer), which keeps them easy to test in
//! isolation.
//!
//! # Modules
//!
//! - [`checklist`]: The bordered item list with checkboxes
//! - [`editor`]: The edit / new item overlay
//! - [`help`]: The keybinding overlay
//! - [`status_bar`]: The footer with hints, notices and reload time

pub mod checklist;
pub mod editor;
pub mod help;
pub mod status_bar;

pub use checklist::{panel_title, render_checklist, render_disabled_panel};
pub use editor::render_editor;
pub use help::render_help_overlay;
pub use status_bar::render_status_bar;

#[cfg(test)]
mod tests;
