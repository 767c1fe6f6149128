use crate::*;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_u32(&mut self, start: u32, end_exclusive: u32) -> u32 {
        self.gen_range_u64(start as u64, end_exclusive as u64) as u32
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }
}

fn ceil_rows(height: u32, row_height: u32) -> usize {
    height.div_ceil(row_height) as usize
}

#[test]
fn snap_down_floors_negative_values() {
    assert_eq!(snap_down(-183, 155), -310);
    assert_eq!(snap_down(-155, 155), -155);
    assert_eq!(snap_down(-1, 155), -155);
    assert_eq!(snap_down(0, 155), 0);
    assert_eq!(snap_down(154, 155), 0);
    assert_eq!(snap_down(155, 155), 155);
    assert_eq!(snap_down(400, 155), 310);
}

#[test]
fn snap_step_never_zero() {
    assert_eq!(snap_step(31, 5), 155);
    assert_eq!(snap_step(0, 5), 5);
    assert_eq!(snap_step(31, 0), 31);
    assert_eq!(snap_step(0, 0), 1);
}

#[test]
fn relative_top_goes_negative_above_content() {
    assert_eq!(relative_top(0, 183), -183);
    assert_eq!(relative_top(183, 183), 0);
    assert_eq!(relative_top(1000, 183), 817);
    assert_eq!(relative_top(u64::MAX, 0), i64::MAX);
}

#[test]
fn window_starts_at_zero_while_header_is_visible() {
    // rowHeight=31, margin=5, headerOffset=183: relative top -183 snaps to -310.
    let w = compute_window(0, 600, 31, 5, 183);
    assert_eq!(w.start, 0);
    // effective height = 600 - 310 = 290 -> ceil(290 / 31) = 10 rows, plus 2 × 5 margin.
    assert_eq!(w.end, 20);

    for scroll in [1u64, 50, 100, 182] {
        assert_eq!(compute_window(scroll, 600, 31, 5, 183).start, 0);
    }
}

#[test]
fn window_past_header_covers_viewport_plus_margins() {
    // 183 + 3 × 155 puts the snapped top exactly at row 15.
    let w = compute_window(183 + 465, 600, 31, 5, 183);
    assert_eq!(w.start, 10);
    assert_eq!(w.len(), 10 + 20);
}

#[test]
fn thousand_items_render_about_thirty_rows() {
    let items: std::vec::Vec<u32> = (0..1000).collect();
    let w = compute_window(5_000, 600, 31, 5, 183);
    assert_eq!(w.slice(&items).len(), 2 * 5 + 20);
}

#[test]
fn far_above_header_yields_valid_window() {
    // Header much taller than the viewport: effective height is negative.
    let w = compute_window(0, 100, 31, 5, 2_000);
    assert_eq!(w.start, 0);
    assert!(w.end >= w.start);

    let w = compute_window(0, 0, 31, 5, u32::MAX);
    assert_eq!(w, Window::EMPTY);
}

#[test]
fn zero_row_height_does_not_divide_by_zero() {
    let w = compute_window(10_000, 600, 0, 5, 0);
    assert!(w.end >= w.start);
}

#[test]
fn snap_stability_same_cell_same_window() {
    let mut rng = Lcg::new(0x5eed_0001);
    for _ in 0..2_000 {
        let row_height = rng.gen_range_u32(1, 64);
        let margin = rng.gen_range_usize(1, 12);
        let header = rng.gen_range_u32(0, 400);
        let viewport = rng.gen_range_u32(0, 2_000);
        let step = snap_step(row_height, margin);

        let a = rng.gen_range_u64(0, 200_000);
        let cell = snap_down(relative_top(a, header), step);
        // Any other offset whose relative top lands in the same cell.
        let delta = rng.gen_range_u64(0, step);
        let b_rel = cell + delta as i64;
        let b = b_rel + header as i64;
        if b < 0 {
            continue;
        }
        let b = b as u64;

        assert_eq!(
            compute_window(a, viewport, row_height, margin, header),
            compute_window(b, viewport, row_height, margin, header),
            "a={a} b={b} rh={row_height} m={margin} header={header}"
        );
    }
}

#[test]
fn start_is_monotonic_in_scroll_offset() {
    let mut rng = Lcg::new(0x5eed_0002);
    for _ in 0..200 {
        let row_height = rng.gen_range_u32(1, 64);
        let margin = rng.gen_range_usize(1, 12);
        let header = rng.gen_range_u32(0, 400);
        let viewport = rng.gen_range_u32(0, 2_000);

        let mut offset = 0u64;
        let mut prev = compute_window(offset, viewport, row_height, margin, header);
        for _ in 0..100 {
            offset += rng.gen_range_u64(0, 500);
            let next = compute_window(offset, viewport, row_height, margin, header);
            assert!(next.start >= prev.start, "offset={offset} {prev:?} -> {next:?}");
            prev = next;
        }
    }
}

#[test]
fn windows_are_never_inverted() {
    let mut rng = Lcg::new(0x5eed_0003);
    for _ in 0..5_000 {
        let w = compute_window(
            rng.gen_range_u64(0, 1 << 40),
            rng.gen_range_u32(0, 10_000),
            rng.gen_range_u32(0, 100),
            rng.gen_range_usize(0, 20),
            rng.gen_range_u32(0, 100_000),
        );
        assert!(w.end >= w.start, "{w:?}");
    }
}

#[test]
fn margin_coverage_once_past_header() {
    let mut rng = Lcg::new(0x5eed_0004);
    for _ in 0..5_000 {
        let row_height = rng.gen_range_u32(1, 64);
        let margin = rng.gen_range_usize(1, 12);
        let header = rng.gen_range_u32(0, 400);
        let viewport = rng.gen_range_u32(0, 2_000);
        let offset = header as u64 + rng.gen_range_u64(0, 1_000_000);

        let w = compute_window(offset, viewport, row_height, margin, header);
        assert!(
            w.len() >= 2 * margin + ceil_rows(viewport, row_height),
            "{w:?} rh={row_height} m={margin} vh={viewport}"
        );
    }
}

#[test]
fn window_covers_every_visible_row() {
    let mut rng = Lcg::new(0x5eed_0005);
    for _ in 0..5_000 {
        let row_height = rng.gen_range_u32(1, 64);
        let margin = rng.gen_range_usize(1, 12);
        let header = rng.gen_range_u32(0, 400);
        let viewport = rng.gen_range_u32(1, 2_000);
        let offset = rng.gen_range_u64(0, 1_000_000);

        let w = compute_window(offset, viewport, row_height, margin, header);
        let rel = relative_top(offset, header);
        let first_px = rel.max(0);
        let last_px = rel + viewport as i64 - 1;
        if last_px < 0 {
            continue;
        }
        let first_row = (first_px / row_height as i64) as usize;
        let last_row = (last_px / row_height as i64) as usize;
        assert!(w.contains(first_row), "{w:?} first_row={first_row}");
        assert!(w.contains(last_row), "{w:?} last_row={last_row}");
    }
}

#[test]
fn calculator_short_circuits_inside_snap_cell() {
    let mut c = WindowCalculator::new(WindowOptions::default(), 600);
    assert_eq!(c.window(), Window::EMPTY);
    assert_eq!(c.snapped_top(), None);

    let first = c.on_scroll(0);
    assert_eq!(
        first,
        WindowChange::Moved {
            from: Window::EMPTY,
            to: Window::new(0, 20)
        }
    );
    assert_eq!(c.snapped_top(), Some(-310));

    // Relative tops in [-310, -155) share a cell.
    assert_eq!(c.on_scroll(10), WindowChange::Snapped);
    assert_eq!(c.on_scroll(27), WindowChange::Snapped);
    assert_eq!(c.window(), Window::new(0, 20));

    // -155 is the next cell; the window grows as the header scrolls away.
    assert_eq!(
        c.on_scroll(28),
        WindowChange::Moved {
            from: Window::new(0, 20),
            to: Window::new(0, 25)
        }
    );
}

#[test]
fn calculator_reports_unchanged_when_bounds_match() {
    let mut c = WindowCalculator::new(WindowOptions::default(), 600);
    c.on_scroll(183);
    let at_zero = c.window();
    assert_eq!(at_zero, Window::new(0, 30));

    // Next cell (relative top 155): first row 5, start clamps to 0 again.
    assert_eq!(c.on_scroll(183 + 155), WindowChange::Unchanged);
    assert_eq!(c.snapped_top(), Some(155));
    assert_eq!(c.window(), at_zero);

    assert!(c.on_scroll(183 + 310).is_moved());
    assert_eq!(c.window(), Window::new(5, 35));
}

#[test]
fn resize_alone_leaves_window_stale() {
    let mut c = WindowCalculator::new(WindowOptions::default(), 600);
    c.on_scroll(2_000);
    let before = c.window();

    assert!(c.set_viewport_height(1_200));
    assert!(!c.set_viewport_height(1_200));
    assert_eq!(c.window(), before);

    // Same cell: still stale.
    assert_eq!(c.on_scroll(2_001), WindowChange::Snapped);
    assert_eq!(c.window(), before);

    // Refresh forces a recompute with the new height.
    assert!(c.refresh(2_001).is_moved());
    assert_eq!(c.window().len(), 10 + ceil_rows(1_200, 31));
}

#[test]
fn set_options_drops_snap_cache() {
    let mut c = WindowCalculator::new(WindowOptions::default(), 600);
    c.on_scroll(2_000);
    c.set_options(WindowOptions::default());
    assert!(c.snapped_top().is_some());

    c.set_options(WindowOptions::default().with_margin(2));
    assert_eq!(c.snapped_top(), None);
    assert!(c.on_scroll(2_000).is_moved());
    assert_eq!(c.window().len(), 4 + ceil_rows(600, 31));
}

#[test]
fn window_for_matches_on_scroll() {
    let mut c = WindowCalculator::new(WindowOptions::default().with_header_offset(0), 480);
    let mut rng = Lcg::new(0x5eed_0006);
    for _ in 0..500 {
        let offset = rng.gen_range_u64(0, 100_000);
        let preview = c.window_for(offset);
        c.on_scroll(offset);
        assert_eq!(c.window(), preview);
    }
}

#[test]
fn frame_state_round_trip_keeps_snap_cache() {
    let mut a = WindowCalculator::new(WindowOptions::default(), 600);
    a.on_scroll(5_000);
    let frame = a.frame_state();

    let mut b = WindowCalculator::new(WindowOptions::default(), 0);
    b.restore_frame_state(frame);
    assert_eq!(b.window(), a.window());
    assert_eq!(b.viewport_height(), 600);
    assert_eq!(b.on_scroll(5_000), WindowChange::Snapped);

    b.reset();
    assert_eq!(b.window(), Window::EMPTY);
    assert_eq!(b.snapped_top(), None);
}

#[test]
fn window_slicing_is_safe_past_either_end() {
    let items = [1, 2, 3, 4, 5];
    assert_eq!(Window::new(1, 3).slice(&items), &[2, 3]);
    assert_eq!(Window::new(3, 50).slice(&items), &[4, 5]);
    assert!(Window::new(10, 20).slice(&items).is_empty());
    assert_eq!(Window::new(7, 2), Window::new(7, 7));
    assert_eq!(Window::new(2, 4).clamp_to(3), 2..3);
    assert_eq!(Window::new(4, 6).offset_px(31), 124);
}
