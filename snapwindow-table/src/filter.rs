use alloc::sync::Arc;
use core::fmt;

/// A row predicate.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// The table's filter state.
///
/// An active filter switches the table from windowed focus to whole-result focus; see
/// [`crate::Focus`].
pub enum ItemFilter<T> {
    Inactive,
    Active(Predicate<T>),
}

impl<T> ItemFilter<T> {
    pub fn new(predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self::Active(Arc::new(predicate))
    }

    /// Converts an optional predicate, as produced by a filter input widget.
    pub fn from_option(predicate: Option<Predicate<T>>) -> Self {
        match predicate {
            Some(p) => Self::Active(p),
            None => Self::Inactive,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn predicate(&self) -> Option<&Predicate<T>> {
        match self {
            Self::Active(p) => Some(p),
            Self::Inactive => None,
        }
    }
}

impl<T> Default for ItemFilter<T> {
    fn default() -> Self {
        Self::Inactive
    }
}

impl<T> Clone for ItemFilter<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Inactive => Self::Inactive,
            Self::Active(p) => Self::Active(Arc::clone(p)),
        }
    }
}

impl<T> fmt::Debug for ItemFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => f.write_str("Inactive"),
            Self::Active(_) => f.write_str("Active(..)"),
        }
    }
}
