//! The ordered checklist and its selection cursor.
//!
//! [`ChecklistStore`] owns the item sequence and the cursor, and provides the
//! structural mutations the widget performs. Every operation is total: out of
//! range conditions clamp or do nothing, and nothing here returns an error.
//!
//! Mutating operations return `true` when the store actually changed.

use crate::item::ChecklistItem;

/// An ordered list of checklist items with an optional selection.
///
/// The selection is either `None` or an index strictly below `len()`.
///
/// # Examples
///
/// ```
/// use jot_protocol::{ChecklistItem, ChecklistStore};
///
/// let mut store = ChecklistStore::from_items(vec![
///     ChecklistItem::new("Buy milk"),
///     ChecklistItem::new("Water plants"),
/// ]);
///
/// store.next();
/// assert_eq!(store.selected(), Some(0));
///
/// // The selection follows the moved item.
/// store.demote();
/// assert_eq!(store.selected(), Some(1));
/// assert_eq!(store.items()[1].text, "Buy milk");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChecklistStore {
    items: Vec<ChecklistItem>,
    selected: Option<usize>,
}

impl ChecklistStore {
    /// Creates an empty store with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `items`, with nothing selected.
    #[must_use]
    pub fn from_items(items: Vec<ChecklistItem>) -> Self {
        Self {
            items,
            selected: None,
        }
    }

    /// Returns the items in display and persistence order.
    #[must_use]
    pub fn items(&self) -> &[ChecklistItem] {
        &self.items
    }

    /// Returns the selected index, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the selected item, if any.
    #[must_use]
    pub fn selected_item(&self) -> Option<&ChecklistItem> {
        self.items.get(self.selected?)
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns how many items are checked off.
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }

    /// Moves the selection one item down, stopping at the last item.
    ///
    /// With nothing selected, selects the first item if there is one.
    pub fn next(&mut self) -> bool {
        let Some(last) = self.last_index() else {
            return false;
        };
        let target = match self.selected {
            Some(idx) => (idx + 1).min(last),
            None => 0,
        };
        self.set_selected(Some(target))
    }

    /// Moves the selection one item up, stopping at the first item.
    ///
    /// With nothing selected, selects the first item if there is one.
    pub fn prev(&mut self) -> bool {
        if self.is_empty() {
            return false;
        }
        let target = self.selected.map_or(0, |idx| idx.saturating_sub(1));
        self.set_selected(Some(target))
    }

    /// Selects the item at `index`. Out of range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.set_selected(Some(index))
    }

    /// Clears the selection.
    pub fn unselect(&mut self) -> bool {
        self.set_selected(None)
    }

    /// Flips the completion flag of the selected item.
    pub fn toggle(&mut self) -> bool {
        match self.selected_item_mut() {
            Some(item) => {
                item.toggle();
                true
            }
            None => false,
        }
    }

    /// Moves the selected item one position up; the selection follows it.
    pub fn promote(&mut self) -> bool {
        match self.selected {
            Some(idx) if idx > 0 => {
                self.items.swap(idx - 1, idx);
                self.selected = Some(idx - 1);
                true
            }
            _ => false,
        }
    }

    /// Moves the selected item one position down; the selection follows it.
    pub fn demote(&mut self) -> bool {
        match self.selected {
            Some(idx) if idx + 1 < self.items.len() => {
                self.items.swap(idx, idx + 1);
                self.selected = Some(idx + 1);
                true
            }
            _ => false,
        }
    }

    /// Removes the selected item.
    ///
    /// The selection stays at the same index, so the item that slid into
    /// place becomes selected. Deleting the last item selects the new last
    /// item, and deleting the only item clears the selection.
    pub fn delete(&mut self) -> bool {
        let Some(idx) = self.selected.filter(|&idx| idx < self.items.len()) else {
            return false;
        };
        self.items.remove(idx);
        self.selected = self.last_index().map(|last| idx.min(last));
        true
    }

    /// Replaces the text of the selected item.
    pub fn set_text(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        match self.selected_item_mut() {
            Some(item) if item.text != text => {
                item.text = text;
                true
            }
            _ => false,
        }
    }

    /// Inserts `item` below the selection, or at the end when nothing is
    /// selected, and selects it.
    pub fn insert(&mut self, item: ChecklistItem) -> bool {
        let at = self
            .selected
            .map_or(self.items.len(), |idx| (idx + 1).min(self.items.len()));
        self.items.insert(at, item);
        self.selected = Some(at);
        true
    }

    /// Replaces the whole item sequence.
    ///
    /// An empty replacement clears the selection. Otherwise the current
    /// selection is kept, clamped to the new last item, so a reload does not
    /// lose the cursor.
    pub fn replace_items(&mut self, items: Vec<ChecklistItem>) -> bool {
        let changed = self.items != items;
        self.items = items;
        let selected = match (self.selected, self.last_index()) {
            (Some(idx), Some(last)) => Some(idx.min(last)),
            _ => None,
        };
        self.set_selected(selected) || changed
    }

    fn last_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }

    fn selected_item_mut(&mut self) -> Option<&mut ChecklistItem> {
        self.items.get_mut(self.selected?)
    }

    fn set_selected(&mut self, selected: Option<usize>) -> bool {
        let changed = self.selected != selected;
        self.selected = selected;
        changed
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_items() -> impl Strategy<Value = Vec<ChecklistItem>> {
        prop::collection::vec(
            ("[a-z ]{0,12}", any::<bool>()).prop_map(|(text, done)| ChecklistItem { text, done }),
            0..12,
        )
    }

    /// A store plus a valid (or absent) selection.
    fn arb_store() -> impl Strategy<Value = ChecklistStore> {
        arb_items().prop_flat_map(|items| {
            let len = items.len();
            let selection = if len == 0 {
                Just(None).boxed()
            } else {
                prop::option::of(0..len).boxed()
            };
            selection.prop_map(move |selected| {
                let mut store = ChecklistStore::from_items(items.clone());
                if let Some(idx) = selected {
                    store.select(idx);
                }
                store
            })
        })
    }

    fn selection_in_range(store: &ChecklistStore) -> bool {
        store.selected().is_none_or(|idx| idx < store.len())
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Next,
        Prev,
        Unselect,
        Toggle,
        Promote,
        Demote,
        Delete,
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Next),
            Just(Op::Prev),
            Just(Op::Unselect),
            Just(Op::Toggle),
            Just(Op::Promote),
            Just(Op::Demote),
            Just(Op::Delete),
        ]
    }

    proptest! {
        /// The selection never leaves the valid range, whatever the sequence of operations.
        #[test]
        fn selection_stays_in_range(mut store in arb_store(), ops in prop::collection::vec(arb_op(), 0..40)) {
            for op in ops {
                match op {
                    Op::Next => { store.next(); }
                    Op::Prev => { store.prev(); }
                    Op::Unselect => { store.unselect(); }
                    Op::Toggle => { store.toggle(); }
                    Op::Promote => { store.promote(); }
                    Op::Demote => { store.demote(); }
                    Op::Delete => { store.delete(); }
                }
                prop_assert!(selection_in_range(&store));
            }
        }

        /// Toggling twice restores the original item sequence.
        #[test]
        fn toggle_twice_is_identity(mut store in arb_store()) {
            let before = store.clone();
            store.toggle();
            store.toggle();
            prop_assert_eq!(store, before);
        }

        /// Promote followed by demote restores order and selection when the promote moved something.
        #[test]
        fn promote_then_demote_restores(mut store in arb_store()) {
            let before = store.clone();
            if store.promote() {
                store.demote();
            }
            prop_assert_eq!(store, before);
        }

        /// Demote followed by promote restores order and selection when the demote moved something.
        #[test]
        fn demote_then_promote_restores(mut store in arb_store()) {
            let before = store.clone();
            if store.demote() {
                store.promote();
            }
            prop_assert_eq!(store, before);
        }

        /// Delete removes exactly one item when something is selected.
        #[test]
        fn delete_removes_one_item(mut store in arb_store()) {
            let len = store.len();
            let had_selection = store.selected().is_some();
            prop_assert_eq!(store.delete(), had_selection);
            let expected = if had_selection { len - 1 } else { len };
            prop_assert_eq!(store.len(), expected);
            prop_assert!(selection_in_range(&store));
        }
    }
}
