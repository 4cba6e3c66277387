//! Checklist controller for the jot todo widget.
//!
//! This crate connects the in-memory [`ChecklistStore`](jot_protocol::ChecklistStore)
//! to a storage location and a renderer. It is independent of any terminal
//! library: hosts provide a [`Storage`] and a [`Renderer`] and feed
//! [`Action`](jot_protocol::Action)s in.
//!
//! # Overview
//!
//! - [`controller`]: `ChecklistController`, the load / mutate / persist / render cycle
//! - [`storage`]: the `Storage` trait with file and in-memory implementations
//! - [`document`]: the on-disk JSON format
//! - [`render`]: the `Renderer` callback and `RowView`
//! - [`error`]: Error types
//!
//! # Example
//!
//! ```no_run
//! use jot_config::Config;
//! use jot_core::{ChecklistController, FileStorage, NullRenderer};
//! use jot_protocol::Action;
//!
//! # fn main() -> jot_core::Result<()> {
//! let config = Config::load()?;
//! let mut controller =
//!     ChecklistController::from_config(&config, FileStorage::new(), NullRenderer::default())?;
//!
//! controller.load()?;
//! controller.handle_action(Action::SelectNext)?;
//! controller.handle_action(Action::ToggleDone)?;
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod document;
pub mod error;
pub mod render;
pub mod storage;

// Re-export primary types at crate root for convenience
pub use controller::{ChecklistController, HostRequest, LoadState, Outcome};
pub use error::{ControllerError, DocumentError, Result, StorageError};
pub use render::{NullRenderer, Renderer, RowView};
pub use storage::{FileStorage, MemoryStorage, Storage};
