use alloc::vec::Vec;

use crate::RowKey;

/// The sorted, filterable data source behind a table.
///
/// The table never owns items. It reads the sorted projection on every render and reports
/// back which indices are in focus.
///
/// `set_focus` takes `&self`: it is a notification fired while rows borrowed from
/// [`SortedSource::sorted`] may still be alive. Implementations typically record the range
/// in a `Cell` and act on it later.
pub trait SortedSource {
    type Item;
    type Key: RowKey;

    /// All items in display order.
    fn sorted(&self) -> &[Self::Item];

    /// Items matching `predicate`, in display order.
    fn filter(&self, predicate: &dyn Fn(&Self::Item) -> bool) -> Vec<&Self::Item> {
        self.sorted().iter().filter(|item| predicate(item)).collect()
    }

    /// Stable identity of `item`, used to reconcile rendered rows across frames.
    fn key_of(&self, item: &Self::Item) -> Self::Key;

    /// Marks `[start, end)` as the range the source should keep up to date.
    fn set_focus(&self, start: usize, end: usize);
}
