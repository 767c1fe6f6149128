use alloc::sync::Arc;
use core::fmt;

use crate::{TableGeometry, TableWindow};

/// A callback fired whenever the table's render-relevant state changes (window moved,
/// viewport resized, filter replaced). Adapters use it to schedule a re-render.
///
/// It runs while the table is being updated; it must not try to mutate the table.
pub type OnChangeCallback<T> = Arc<dyn Fn(&TableWindow<T>) + Send + Sync>;

/// What a viewport resize does to the window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResizePolicy {
    /// Store the new height only. The window stays as it is until the next scroll event
    /// lands in a new snap cell.
    #[default]
    KeepWindow,
    /// Recompute the window immediately from the host's current scroll offset.
    Recompute,
}

/// Configuration for [`TableWindow`].
pub struct TableOptions<T> {
    pub geometry: TableGeometry,
    pub resize_policy: ResizePolicy,
    pub on_change: Option<OnChangeCallback<T>>,
}

impl<T> TableOptions<T> {
    pub fn new(geometry: TableGeometry) -> Self {
        Self {
            geometry,
            resize_policy: ResizePolicy::default(),
            on_change: None,
        }
    }

    pub fn with_geometry(mut self, geometry: TableGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn with_resize_policy(mut self, resize_policy: ResizePolicy) -> Self {
        self.resize_policy = resize_policy;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&TableWindow<T>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<T> Default for TableOptions<T> {
    fn default() -> Self {
        Self::new(TableGeometry::default())
    }
}

impl<T> Clone for TableOptions<T> {
    fn clone(&self) -> Self {
        Self {
            geometry: self.geometry,
            resize_policy: self.resize_policy,
            on_change: self.on_change.clone(),
        }
    }
}

impl<T> fmt::Debug for TableOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableOptions")
            .field("geometry", &self.geometry)
            .field("resize_policy", &self.resize_policy)
            .finish_non_exhaustive()
    }
}
