//! The redraw callback consumed by the controller.

use jot_protocol::ChecklistStore;

/// One displayed row of the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowView<'a> {
    /// The item label.
    pub text: &'a str,
    /// Whether the item is checked off.
    pub done: bool,
    /// Whether the cursor is on this row.
    pub selected: bool,
}

impl<'a> RowView<'a> {
    /// Builds the rows for every item of `store`, in order.
    #[must_use]
    pub fn collect(store: &'a ChecklistStore) -> Vec<Self> {
        store
            .items()
            .iter()
            .enumerate()
            .map(|(idx, item)| RowView {
                text: &item.text,
                done: item.done,
                selected: store.selected() == Some(idx),
            })
            .collect()
    }
}

/// Receives the full list every time the widget state changes.
pub trait Renderer {
    /// Redraws the list.
    fn render(&mut self, rows: &[RowView<'_>]);
}

/// A renderer that only counts redraws, for headless use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullRenderer {
    /// How many times `render` was called.
    pub renders: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, _rows: &[RowView<'_>]) {
        self.renders += 1;
    }
}
