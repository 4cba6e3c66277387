//! User actions understood by the checklist widget.
//!
//! The host translates key presses into [`Action`]s and hands them to the
//! controller, which decides whether the action mutates the list, only moves
//! the cursor, or has to be handled by the host itself.

use serde::{Deserialize, Serialize};

/// The closed set of actions the widget reacts to.
///
/// # Examples
///
/// ```
/// use jot_protocol::Action;
///
/// assert!(Action::ToggleDone.is_mutating());
/// assert!(Action::ShowHelp.is_delegated());
/// assert!(!Action::SelectNext.is_mutating() && !Action::SelectNext.is_delegated());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Move the cursor to the next item.
    SelectNext,
    /// Move the cursor to the previous item.
    SelectPrev,
    /// Clear the cursor.
    Unselect,
    /// Check or uncheck the selected item.
    ToggleDone,
    /// Move the selected item up one position.
    Promote,
    /// Move the selected item down one position.
    Demote,
    /// Remove the selected item.
    Delete,
    /// Edit the text of the selected item.
    Edit,
    /// Open the backing file with an external program.
    OpenExternal,
    /// Show the keybinding help.
    ShowHelp,
}

impl Action {
    /// Every action, in help-display order.
    pub const ALL: [Action; 10] = [
        Action::SelectNext,
        Action::SelectPrev,
        Action::Unselect,
        Action::ToggleDone,
        Action::Promote,
        Action::Demote,
        Action::Delete,
        Action::Edit,
        Action::OpenExternal,
        Action::ShowHelp,
    ];

    /// Returns `true` if the action changes the persisted item sequence.
    #[must_use]
    pub const fn is_mutating(self) -> bool {
        matches!(
            self,
            Self::ToggleDone | Self::Promote | Self::Demote | Self::Delete
        )
    }

    /// Returns `true` if the host, not the store, carries out the action.
    #[must_use]
    pub const fn is_delegated(self) -> bool {
        matches!(self, Self::Edit | Self::OpenExternal | Self::ShowHelp)
    }

    /// Short human-readable description, used by the help overlay.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SelectNext => "Select next",
            Self::SelectPrev => "Select previous",
            Self::Unselect => "Clear selection",
            Self::ToggleDone => "Check / uncheck",
            Self::Promote => "Move item up",
            Self::Demote => "Move item down",
            Self::Delete => "Delete item",
            Self::Edit => "Edit item",
            Self::OpenExternal => "Open file",
            Self::ShowHelp => "Show help",
        }
    }
}
