use crate::{
    FrameState, ViewportState, Window, WindowChange, WindowOptions, WindowState, relative_top,
    snap_down, window_for_snapped_top,
};

/// Stateful window calculator.
///
/// Holds the current window, the viewport height and the last snapped relative top. Adapters
/// feed it scroll offsets; it suppresses work at two levels:
/// - an offset in the same snap cell as the previous one is a no-op ([`WindowChange::Snapped`]),
/// - a recomputation that lands on the same bounds leaves the window untouched
///   ([`WindowChange::Unchanged`]).
///
/// The window starts out empty and is only ever updated in place.
#[derive(Clone, Debug)]
pub struct WindowCalculator {
    options: WindowOptions,
    viewport_height: u32,
    snapped_top: Option<i64>,
    window: Window,
}

impl WindowCalculator {
    pub fn new(options: WindowOptions, viewport_height: u32) -> Self {
        vdebug!(
            row_height = options.row_height,
            margin = options.margin,
            header_offset = options.header_offset,
            viewport_height,
            "WindowCalculator::new"
        );
        Self {
            options,
            viewport_height,
            snapped_top: None,
            window: Window::EMPTY,
        }
    }

    pub fn options(&self) -> &WindowOptions {
        &self.options
    }

    /// Replaces the options. The snap cache is dropped when anything changed, so the next
    /// [`Self::on_scroll`] always recomputes.
    pub fn set_options(&mut self, options: WindowOptions) {
        if self.options == options {
            return;
        }
        self.options = options;
        self.snapped_top = None;
    }

    pub fn viewport_height(&self) -> u32 {
        self.viewport_height
    }

    /// Updates the viewport height without recomputing the window.
    ///
    /// Returns `true` if the height changed. The current window stays as it is until the
    /// next scroll (or an explicit [`Self::refresh`]).
    pub fn set_viewport_height(&mut self, viewport_height: u32) -> bool {
        if self.viewport_height == viewport_height {
            return false;
        }
        self.viewport_height = viewport_height;
        true
    }

    pub fn window(&self) -> Window {
        self.window
    }

    pub fn snapped_top(&self) -> Option<i64> {
        self.snapped_top
    }

    /// Computes the window for `scroll_offset` with the current geometry, without touching
    /// any state.
    pub fn window_for(&self, scroll_offset: u64) -> Window {
        let snapped = self.snap(scroll_offset);
        window_for_snapped_top(
            snapped,
            self.viewport_height,
            self.options.row_height,
            self.options.margin,
        )
    }

    /// Applies a scroll offset.
    pub fn on_scroll(&mut self, scroll_offset: u64) -> WindowChange {
        let snapped = self.snap(scroll_offset);
        if self.snapped_top == Some(snapped) {
            return WindowChange::Snapped;
        }
        self.snapped_top = Some(snapped);

        let next = window_for_snapped_top(
            snapped,
            self.viewport_height,
            self.options.row_height,
            self.options.margin,
        );
        if next == self.window {
            return WindowChange::Unchanged;
        }

        let from = self.window;
        self.window = next;
        vtrace!(
            scroll_offset,
            snapped,
            start = next.start,
            end = next.end,
            "window moved"
        );
        WindowChange::Moved { from, to: next }
    }

    /// Forgets the snap cache and applies `scroll_offset`, so the window is recomputed even
    /// if the offset is in the same cell as before.
    pub fn refresh(&mut self, scroll_offset: u64) -> WindowChange {
        self.snapped_top = None;
        self.on_scroll(scroll_offset)
    }

    /// Returns to the initial empty window and clears the snap cache.
    pub fn reset(&mut self) {
        self.snapped_top = None;
        self.window = Window::EMPTY;
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            height: self.viewport_height,
        }
    }

    pub fn window_state(&self) -> WindowState {
        WindowState {
            window: self.window,
            snapped_top: self.snapped_top,
        }
    }

    pub fn frame_state(&self) -> FrameState {
        FrameState {
            viewport: self.viewport_state(),
            window: self.window_state(),
        }
    }

    /// Restores a previously captured snapshot.
    pub fn restore_frame_state(&mut self, frame: FrameState) {
        self.viewport_height = frame.viewport.height;
        self.window = Window::new(frame.window.window.start, frame.window.window.end);
        self.snapped_top = frame.window.snapped_top;
    }

    fn snap(&self, scroll_offset: u64) -> i64 {
        snap_down(
            relative_top(scroll_offset, self.options.header_offset),
            self.options.snap_step(),
        )
    }
}
