//! A headless windowing engine for long tables with uniform row height.
//!
//! Given a scroll offset, a viewport height and the row geometry, this crate computes the
//! contiguous index range `[start, end)` of rows that must be materialized. The scroll
//! position is snapped down to a coarse grid (`row_height × margin`) before anything else, so
//! small scroll deltas inside one grid cell cost nothing and produce no new window.
//!
//! It is UI-agnostic. A TUI/GUI/web layer is expected to provide:
//! - the scroll offset of the container
//! - the viewport height
//! - the fixed row geometry
//!
//! For a filterable table component driven by host scroll/resize events, see the
//! `snapwindow-table` crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod calculator;
mod options;
mod snap;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use calculator::WindowCalculator;
pub use options::WindowOptions;
pub use snap::{compute_window, relative_top, snap_down, snap_step, window_for_snapped_top};
pub use state::{FrameState, ViewportState, WindowState};
pub use types::{Window, WindowChange};
