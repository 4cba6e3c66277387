//! Messages driving the application update loop.
//!
//! Key presses become [`Message`]s in [`event`](crate::event); the
//! [`App`](crate::App) consumes them in `update`. Widget actions are wrapped
//! as [`Message::Action`] and forwarded to the checklist controller.

use jot_protocol::Action;

/// Everything the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A checklist action.
    Action(Action),
    /// Open the editor for a new item.
    NewItem,
    /// Reload the todo file from disk.
    Refresh,
    /// Quit the application.
    Quit,

    /// Type a character into the open editor.
    EditorInput {
        /// The typed character.
        ch: char,
    },
    /// Delete the character before the editor cursor.
    EditorBackspace,
    /// Move the editor cursor one character left.
    EditorLeft,
    /// Move the editor cursor one character right.
    EditorRight,
    /// Accept the editor contents.
    EditorConfirm,
    /// Close the editor without changes.
    EditorCancel,
}

impl From<Action> for Message {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}
