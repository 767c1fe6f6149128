use snapwindow::Window;

use crate::{ItemFilter, SortedSource};

/// Which indices the data source is told to prioritize.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Focus {
    /// No filter: only the windowed rows are rendered, so only they are in focus.
    Window(Window),
    /// Filter with matches: the whole result `[0, len)` is in focus, because scroll position
    /// cannot be mapped onto a sparse subset of the sequence.
    FullResult { len: usize },
    /// Filter with no matches: nothing is rendered and the source is not notified.
    Suppressed,
}

impl Focus {
    /// Picks the focus for the current filter, window and filtered result length.
    ///
    /// `result_len` is ignored when the filter is inactive.
    pub fn resolve<T>(filter: &ItemFilter<T>, window: Window, result_len: usize) -> Self {
        match filter {
            ItemFilter::Inactive => Self::Window(window),
            ItemFilter::Active(_) if result_len == 0 => Self::Suppressed,
            ItemFilter::Active(_) => Self::FullResult { len: result_len },
        }
    }

    /// The `[start, end)` range this focus reports, if any.
    pub fn range(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Window(w) => Some((w.start, w.end)),
            Self::FullResult { len } => Some((0, len)),
            Self::Suppressed => None,
        }
    }

    /// Forwards the focus range to `source`. Returns `false` when suppressed.
    pub fn notify<S: SortedSource + ?Sized>(&self, source: &S) -> bool {
        let Some((start, end)) = self.range() else {
            return false;
        };
        vtrace!(start, end, "set_focus");
        source.set_focus(start, end);
        true
    }
}
