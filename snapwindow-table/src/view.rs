use alloc::vec::Vec;

use snapwindow::Window;

use crate::{Focus, RowDiff, RowKey};

/// One materialized row.
#[derive(Clone, Debug)]
pub struct Row<'a, T, K> {
    /// Position in the displayed sequence (the filtered result when a filter is active).
    pub index: usize,
    pub key: K,
    pub item: &'a T,
}

/// The windowed slice of a table, plus what a renderer needs to place it.
///
/// Render a container of `content_height` pixels and translate the rows down by `offset_y`;
/// the scrollbar then reflects the full sequence while only `rows` exist.
#[derive(Clone, Debug)]
pub struct RowsView<'a, T, K> {
    pub rows: Vec<Row<'a, T, K>>,
    pub window: Window,
    /// Length of the displayed sequence.
    pub total: usize,
    pub content_height: u64,
    pub offset_y: u64,
    pub focus: Focus,
}

impl<'a, T, K: RowKey> RowsView<'a, T, K> {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn keys(&self) -> Vec<K> {
        self.rows.iter().map(|r| r.key.clone()).collect()
    }

    /// Reconciles against the keys of the previous render.
    pub fn diff_from(&self, prev_keys: &[K]) -> RowDiff<K> {
        RowDiff::between(prev_keys, &self.keys())
    }
}

/// The result of [`crate::TableWindow::render`].
#[derive(Clone, Debug)]
pub enum TableView<'a, T, K> {
    /// A filter is active and matched nothing. Show a "nothing matches" placeholder; the
    /// filter input stays interactive.
    NoMatches,
    Rows(RowsView<'a, T, K>),
}

impl<'a, T, K> TableView<'a, T, K> {
    pub fn is_no_matches(&self) -> bool {
        matches!(self, Self::NoMatches)
    }

    pub fn as_rows(&self) -> Option<&RowsView<'a, T, K>> {
        match self {
            Self::Rows(view) => Some(view),
            Self::NoMatches => None,
        }
    }

    pub fn rows(&self) -> &[Row<'a, T, K>] {
        match self {
            Self::Rows(view) => &view.rows,
            Self::NoMatches => &[],
        }
    }

    pub fn focus(&self) -> Focus {
        match self {
            Self::Rows(view) => view.focus,
            Self::NoMatches => Focus::Suppressed,
        }
    }
}
