use core::ops::Range;

/// A half-open index range `[start, end)` of materialized rows.
///
/// `end` is not clamped to any item count: use [`Window::clamp_to`] or [`Window::slice`]
/// when indexing into real data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start: usize,
    pub end: usize, // exclusive
}

impl Window {
    pub const EMPTY: Self = Self { start: 0, end: 0 };

    /// Builds a window, raising `end` to `start` if it would be smaller.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start <= index && index < self.end
    }

    /// Returns the part of the window that exists in a sequence of `len` items.
    ///
    /// Both bounds are clamped to `len`, so the result is always a valid slice range
    /// (possibly empty).
    pub fn clamp_to(&self, len: usize) -> Range<usize> {
        let start = self.start.min(len);
        let end = self.end.min(len).max(start);
        start..end
    }

    /// Slices `items` by this window. Never panics: a window past either end yields
    /// fewer (or zero) items.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.clamp_to(items.len())]
    }

    /// Vertical pixel offset of the first windowed row inside the scroll container.
    pub fn offset_px(&self, row_height: u32) -> u64 {
        (self.start as u64).saturating_mul(row_height as u64)
    }
}

impl From<Window> for Range<usize> {
    fn from(w: Window) -> Self {
        w.start..w.end
    }
}

/// Outcome of feeding a scroll offset to a [`crate::WindowCalculator`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowChange {
    /// The offset snapped to the same grid cell as last time; nothing was recomputed.
    Snapped,
    /// The window was recomputed but its bounds did not change.
    Unchanged,
    /// The window moved. Callers should re-render and re-notify focus.
    Moved { from: Window, to: Window },
}

impl WindowChange {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}
