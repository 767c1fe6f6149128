/// Bound for stable row identities used in reconciliation.
#[cfg(feature = "std")]
pub trait RowKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<T: core::hash::Hash + Eq + Clone> RowKey for T {}

#[cfg(not(feature = "std"))]
pub trait RowKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<T: Ord + Clone> RowKey for T {}

#[cfg(feature = "std")]
pub(crate) type KeySet<'a, K> = std::collections::HashSet<&'a K>;
#[cfg(not(feature = "std"))]
pub(crate) type KeySet<'a, K> = alloc::collections::BTreeSet<&'a K>;
