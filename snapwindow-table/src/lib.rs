//! A windowed, filterable table component for the `snapwindow` crate.
//!
//! `snapwindow` computes which rows to materialize for a scroll position. This crate wires
//! that calculation to a host (scroll/resize notifications), a sorted data source, and a
//! filter:
//!
//! - [`TableWindow`] owns the window state and the active [`ItemFilter`].
//! - [`TableWindow::mount`] subscribes it to a [`Host`] and returns an owned [`Mount`] handle.
//! - [`TableWindow::render`] produces a [`TableView`] and reports the current [`Focus`] to the
//!   [`SortedSource`].
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod diff;
mod error;
mod filter;
mod focus;
mod geometry;
mod host;
mod key;
mod mount;
mod options;
mod source;
mod table;
mod view;


pub use diff::RowDiff;
pub use error::GeometryError;
pub use filter::{ItemFilter, Predicate};
pub use focus::Focus;
pub use geometry::TableGeometry;
pub use host::{EventHub, Host, HostEvent, Listener, ListenerId};
pub use key::RowKey;
pub use mount::Mount;
pub use options::{OnChangeCallback, ResizePolicy, TableOptions};
pub use source::SortedSource;
pub use table::TableWindow;
pub use view::{Row, RowsView, TableView};
