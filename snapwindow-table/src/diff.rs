use alloc::vec::Vec;

use crate::RowKey;
use crate::key::KeySet;

/// Key-level difference between two consecutive renders.
///
/// A renderer keeps row widgets for `retained` keys, builds widgets for `entered` keys and
/// drops the ones for `exited` keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowDiff<K> {
    /// Keys in the next render but not the previous one, in next-render order.
    pub entered: Vec<K>,
    /// Keys in the previous render but not the next one, in previous-render order.
    pub exited: Vec<K>,
    pub retained: usize,
}

impl<K: RowKey> RowDiff<K> {
    pub fn between(prev: &[K], next: &[K]) -> Self {
        let prev_set: KeySet<'_, K> = prev.iter().collect();
        let next_set: KeySet<'_, K> = next.iter().collect();

        let entered: Vec<K> = next
            .iter()
            .filter(|k| !prev_set.contains(k))
            .cloned()
            .collect();
        let exited: Vec<K> = prev
            .iter()
            .filter(|k| !next_set.contains(k))
            .cloned()
            .collect();
        let retained = next.len() - entered.len();

        Self {
            entered,
            exited,
            retained,
        }
    }

    /// `true` when both renders hold the same set of keys.
    pub fn is_empty(&self) -> bool {
        self.entered.is_empty() && self.exited.is_empty()
    }
}

impl<K> Default for RowDiff<K> {
    fn default() -> Self {
        Self {
            entered: Vec::new(),
            exited: Vec::new(),
            retained: 0,
        }
    }
}
