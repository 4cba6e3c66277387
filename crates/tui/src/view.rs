//! The panel's copy of the rows last pushed by the controller.

use jot_core::{Renderer, RowView};

/// One row as displayed by the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    /// The item label.
    pub text: String,
    /// Whether the item is checked off.
    pub done: bool,
}

/// A [`Renderer`] that keeps an owned snapshot of the rows for the next
/// terminal draw.
///
/// The controller calls [`Renderer::render`] after every change; the
/// terminal frame is drawn later from this snapshot.
///
/// # Examples
///
/// ```
/// use jot_core::{Renderer, RowView};
/// use jot_tui::view::PanelView;
///
/// let mut view = PanelView::default();
/// view.render(&[RowView { text: "Buy milk", done: true, selected: true }]);
///
/// assert_eq!(view.done_count(), 1);
/// assert_eq!(view.selected(), Some(0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelView {
    rows: Vec<PanelRow>,
    selected: Option<usize>,
}

impl PanelView {
    /// Returns the rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[PanelRow] {
        &self.rows
    }

    /// Returns the index of the highlighted row.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there is nothing to show.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of checked rows.
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.rows.iter().filter(|row| row.done).count()
    }
}

impl Renderer for PanelView {
    fn render(&mut self, rows: &[RowView<'_>]) {
        self.selected = rows.iter().position(|row| row.selected);
        self.rows = rows
            .iter()
            .map(|row| PanelRow {
                text: row.text.to_owned(),
                done: row.done,
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_previous_rows() {
        let mut view = PanelView::default();
        view.render(&[
            RowView {
                text: "a",
                done: false,
                selected: false,
            },
            RowView {
                text: "b",
                done: true,
                selected: true,
            },
        ]);
        assert_eq!(view.len(), 2);
        assert_eq!(view.selected(), Some(1));

        view.render(&[]);
        assert!(view.is_empty());
        assert_eq!(view.selected(), None);
        assert_eq!(view.done_count(), 0);
    }
}
