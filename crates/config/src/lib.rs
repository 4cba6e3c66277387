//! Configuration management for the jot todo widget.
//!
//! This crate loads and validates the widget configuration and resolves
//! where the todo file lives.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`refresh`]: Periodic reload interval
//! - [`files`]: Config file discovery and reading
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./jot.json5` or `./jot.json`)
//! 2. User config (`~/.config/jot/config.json5` or `~/.config/jot/config.json`)
//! 3. Built-in defaults
//!
//! # Example File
//!
//! ```json5
//! {
//!   // Relative names resolve under ~/.config/jot/
//!   filename: "todo.json",
//!   title: "Todo",
//!   enabled: true,
//!   refresh: { interval_secs: 300 },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use jot_config::Config;
//!
//! # fn example() -> jot_config::Result<()> {
//! let config = Config::load()?;
//! println!("Todo file: {}", config.storage_path()?.display());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod files;
pub mod refresh;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use refresh::RefreshConfig;
