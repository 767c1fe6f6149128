use crate::Window;

/// A lightweight, serializable snapshot of the viewport geometry.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub height: u32,
}

/// A lightweight, serializable snapshot of the window state.
///
/// `snapped_top` is the last snapped relative top, or `None` before the first scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub window: Window,
    pub snapped_top: Option<i64>,
}

/// A combined snapshot of viewport + window state.
///
/// Restoring a frame brings a calculator back to exactly where it was, including the snap
/// cache, so the next scroll inside the same cell is still a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameState {
    pub viewport: ViewportState,
    pub window: WindowState,
}
