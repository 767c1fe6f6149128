//! Pure window arithmetic.
//!
//! Nothing here holds state; [`crate::WindowCalculator`] layers change suppression on top.

use crate::Window;

/// Size of one snap grid cell in pixels: `row_height × margin`.
///
/// A zero row height counts as 1 and a zero margin as one row, so the step is never 0.
pub fn snap_step(row_height: u32, margin: usize) -> u64 {
    let rows = margin.max(1) as u64;
    (row_height.max(1) as u64).saturating_mul(rows)
}

/// Scroll offset measured from the first row. Negative while the header is still on screen.
pub fn relative_top(scroll_offset: u64, header_offset: u32) -> i64 {
    let scroll = i64::try_from(scroll_offset).unwrap_or(i64::MAX);
    scroll.saturating_sub(header_offset as i64)
}

/// Rounds `value` down to a multiple of `step`, toward negative infinity.
///
/// `snap_down(-183, 155) == -310`, not `-155`.
pub fn snap_down(value: i64, step: u64) -> i64 {
    let step = i64::try_from(step.max(1)).unwrap_or(i64::MAX);
    value.saturating_sub(value.rem_euclid(step))
}

/// Builds the window for an already snapped relative top.
///
/// While `snapped_top` is negative the header still occupies part of the viewport, so the
/// visible height shrinks by that amount (and may go negative; the window then collapses
/// toward `2 × margin` rows or fewer, never below empty).
pub fn window_for_snapped_top(
    snapped_top: i64,
    viewport_height: u32,
    row_height: u32,
    margin: usize,
) -> Window {
    let row = row_height.max(1) as i64;
    let top = snapped_top.max(0);
    let effective_height = if snapped_top < 0 {
        (viewport_height as i64).saturating_add(snapped_top)
    } else {
        viewport_height as i64
    };

    let first = usize::try_from(top / row).unwrap_or(usize::MAX);
    let start = first.saturating_sub(margin);

    let margin_rows = i64::try_from(margin)
        .unwrap_or(i64::MAX)
        .saturating_mul(2);
    let span = margin_rows.saturating_add(ceil_div(effective_height, row));
    let span = usize::try_from(span.max(0)).unwrap_or(usize::MAX);

    Window::new(start, start.saturating_add(span))
}

/// Computes the `[start, end)` window for a scroll position.
///
/// This is the whole algorithm without any change suppression: identical inputs always give
/// identical output, and offsets inside the same snap cell give the same window.
pub fn compute_window(
    scroll_offset: u64,
    viewport_height: u32,
    row_height: u32,
    margin: usize,
    header_offset: u32,
) -> Window {
    let snapped = snap_down(
        relative_top(scroll_offset, header_offset),
        snap_step(row_height, margin),
    );
    window_for_snapped_top(snapped, viewport_height, row_height, margin)
}

fn ceil_div(n: i64, d: i64) -> i64 {
    let q = n.div_euclid(d);
    if n.rem_euclid(d) == 0 { q } else { q + 1 }
}
