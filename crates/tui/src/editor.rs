//! Single-line text input used to edit or add an item.

/// What the editor contents will be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Rename the item at `index`.
    Rename {
        /// Position of the item being renamed.
        index: usize,
    },
    /// Insert a new item below the cursor.
    New,
}

/// State of the item editor overlay.
///
/// `cursor` is a byte offset into `value` and always sits on a character
/// boundary.
///
/// # Examples
///
/// ```
/// use jot_tui::editor::EditorState;
///
/// let mut editor = EditorState::rename(0, "Buy milk");
/// editor.backspace();
/// editor.input_char('x');
/// assert_eq!(editor.value(), "Buy milx");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    target: EditTarget,
    value: String,
    cursor: usize,
}

impl EditorState {
    /// Opens the editor on an existing item, cursor at the end.
    #[must_use]
    pub fn rename(index: usize, text: impl Into<String>) -> Self {
        let value = text.into();
        Self {
            target: EditTarget::Rename { index },
            cursor: value.len(),
            value,
        }
    }

    /// Opens an empty editor for a new item.
    #[must_use]
    pub fn new_item() -> Self {
        Self {
            target: EditTarget::New,
            value: String::new(),
            cursor: 0,
        }
    }

    /// Returns what the contents will be applied to.
    #[must_use]
    pub fn target(&self) -> EditTarget {
        self.target
    }

    /// Returns the current text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position as a byte offset.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts a character at the cursor.
    pub fn input_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    /// Moves the cursor one character left.
    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    /// Moves the cursor one character right.
    pub fn move_right(&mut self) {
        if let Some(ch) = self.value[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Consumes the editor, returning its target and text.
    #[must_use]
    pub fn finish(self) -> (EditTarget, String) {
        (self.target, self.value)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}
