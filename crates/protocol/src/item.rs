//! Checklist item type.
//!
//! A [`ChecklistItem`] is one line of the todo list. Items carry no stable
//! identifier: their identity is their position in the containing
//! [`ChecklistStore`](crate::ChecklistStore).

use serde::{Deserialize, Serialize};

/// A single entry of the checklist.
///
/// The serialized shape is exactly `{ "text": ..., "done": ... }`; unknown
/// fields are rejected when reading.
///
/// # Examples
///
/// ```
/// use jot_protocol::ChecklistItem;
///
/// let mut item = ChecklistItem::new("Buy milk");
/// assert!(!item.done);
///
/// item.toggle();
/// assert!(item.done);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChecklistItem {
    /// The user-visible label. May be empty.
    pub text: String,
    /// Whether the item has been checked off.
    pub done: bool,
}

impl ChecklistItem {
    /// Creates a new, unchecked item.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    /// Creates an item that is already checked off.
    ///
    /// # Examples
    ///
    /// ```
    /// use jot_protocol::ChecklistItem;
    ///
    /// let item = ChecklistItem::completed("Water plants");
    /// assert!(item.done);
    /// ```
    #[must_use]
    pub fn completed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: true,
        }
    }

    /// Flips the completion flag.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    /// Returns the checkbox glyph used when displaying this item.
    #[must_use]
    pub const fn checkbox(&self) -> &'static str {
        if self.done { "[x]" } else { "[ ]" }
    }
}
