//! Shared types for the jot checklist widget.
//!
//! This crate holds the in-memory model of the todo list. It performs no I/O
//! and knows nothing about terminals.
//!
//! # Overview
//!
//! - [`item`]: The `ChecklistItem` record
//! - [`store`]: `ChecklistStore`, the ordered list plus its selection cursor
//! - [`action`]: The closed set of user actions
//!
//! # Examples
//!
//! ```
//! use jot_protocol::{ChecklistItem, ChecklistStore};
//!
//! let mut store = ChecklistStore::from_items(vec![
//!     ChecklistItem::new("Buy milk"),
//!     ChecklistItem::new("Water plants"),
//! ]);
//!
//! store.next();
//! store.toggle();
//! assert_eq!(store.done_count(), 1);
//! ```

pub mod action;
pub mod item;
pub mod store;

// Re-export primary types at crate root for convenience
pub use action::Action;
pub use item::ChecklistItem;
pub use store::ChecklistStore;
