use alloc::rc::Rc;
use alloc::sync::Arc;
use alloc::vec;
use core::cell::{Cell, RefCell};

use snapwindow::{FrameState, Window, WindowCalculator, WindowChange};

use crate::{
    Focus, GeometryError, Host, HostEvent, ItemFilter, Listener, Mount, OnChangeCallback,
    ResizePolicy, Row, RowsView, SortedSource, TableGeometry, TableOptions, TableView,
};

/// A windowed, filterable table.
///
/// Holds the window state, the viewport height and the active filter; never any items. Host
/// events go in through [`Self::on_scroll`] / [`Self::on_resize`] (or automatically after
/// [`Self::mount`]), and [`Self::render`] produces the windowed slice and notifies the data
/// source of the current focus.
pub struct TableWindow<T> {
    geometry: TableGeometry,
    resize_policy: ResizePolicy,
    calculator: WindowCalculator,
    filter: ItemFilter<T>,
    on_change: Option<OnChangeCallback<T>>,
    last_focus: Cell<Option<Focus>>,
}

impl<T> TableWindow<T> {
    pub fn new(options: TableOptions<T>, viewport_height: u32) -> Result<Self, GeometryError> {
        options.geometry.validate()?;
        let calculator = WindowCalculator::new(options.geometry.window_options(), viewport_height);
        Ok(Self {
            geometry: options.geometry,
            resize_policy: options.resize_policy,
            calculator,
            filter: ItemFilter::Inactive,
            on_change: options.on_change,
            last_focus: Cell::new(None),
        })
    }

    pub fn geometry(&self) -> &TableGeometry {
        &self.geometry
    }

    pub fn resize_policy(&self) -> ResizePolicy {
        self.resize_policy
    }

    pub fn set_resize_policy(&mut self, resize_policy: ResizePolicy) {
        self.resize_policy = resize_policy;
    }

    pub fn set_on_change(
        &mut self,
        on_change: Option<impl Fn(&TableWindow<T>) + Send + Sync + 'static>,
    ) {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    pub fn window(&self) -> Window {
        self.calculator.window()
    }

    pub fn viewport_height(&self) -> u32 {
        self.calculator.viewport_height()
    }

    pub fn calculator(&self) -> &WindowCalculator {
        &self.calculator
    }

    pub fn filter(&self) -> &ItemFilter<T> {
        &self.filter
    }

    /// The focus sent (or suppressed) by the most recent [`Self::render`].
    pub fn last_focus(&self) -> Option<Focus> {
        self.last_focus.get()
    }

    fn notify(&self) {
        if let Some(cb) = &self.on_change {
            cb(self);
        }
    }

    /// Applies a host scroll offset. Fires `on_change` only when the window moved.
    pub fn on_scroll(&mut self, scroll_offset: u64) -> WindowChange {
        let change = self.calculator.on_scroll(scroll_offset);
        if change.is_moved() {
            self.notify();
        }
        change
    }

    /// Applies a viewport resize.
    ///
    /// Under [`ResizePolicy::KeepWindow`] the window is left untouched and `None` is returned.
    /// `on_change` still fires when the height changed, so the next render notifies the source
    /// with the current (possibly stale) window again.
    /// Under [`ResizePolicy::Recompute`] the window is recomputed from `scroll_offset`.
    pub fn on_resize(&mut self, viewport_height: u32, scroll_offset: u64) -> Option<WindowChange> {
        let resized = self.calculator.set_viewport_height(viewport_height);
        match self.resize_policy {
            ResizePolicy::KeepWindow => {
                if resized {
                    self.notify();
                }
                None
            }
            ResizePolicy::Recompute => {
                let change = self.calculator.refresh(scroll_offset);
                if resized || change.is_moved() {
                    self.notify();
                }
                Some(change)
            }
        }
    }

    /// Replaces the filter. The next render switches focus policy accordingly.
    pub fn set_filter(&mut self, filter: ItemFilter<T>) {
        vtrace!(active = filter.is_active(), "set_filter");
        self.filter = filter;
        self.notify();
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(ItemFilter::Inactive);
    }

    pub fn frame_state(&self) -> FrameState {
        self.calculator.frame_state()
    }

    pub fn restore_frame_state(&mut self, frame: FrameState) {
        self.calculator.restore_frame_state(frame);
        self.notify();
    }

    /// Builds the windowed view of `source` and notifies it of the current focus.
    ///
    /// - No filter: rows are `sorted()[window]`, focus is the window.
    /// - Filter with matches: rows are `filtered[window]`, focus is `[0, filtered.len())`.
    /// - Filter without matches: [`TableView::NoMatches`], the source is not notified.
    pub fn render<'a, S>(&self, source: &'a S) -> TableView<'a, T, S::Key>
    where
        S: SortedSource<Item = T> + ?Sized,
    {
        let window = self.calculator.window();
        match &self.filter {
            ItemFilter::Inactive => {
                let focus = Focus::resolve(&self.filter, window, 0);
                focus.notify(source);
                self.last_focus.set(Some(focus));

                let items = source.sorted();
                let rows = window.slice(items).iter();
                TableView::Rows(self.rows_view(source, items.len(), rows, focus))
            }
            ItemFilter::Active(predicate) => {
                let matched = source.filter(&**predicate);
                let focus = Focus::resolve(&self.filter, window, matched.len());
                self.last_focus.set(Some(focus));
                if !focus.notify(source) {
                    return TableView::NoMatches;
                }

                let rows = window.slice(&matched).iter().copied();
                TableView::Rows(self.rows_view(source, matched.len(), rows, focus))
            }
        }
    }

    fn rows_view<'a, S>(
        &self,
        source: &S,
        total: usize,
        items: impl Iterator<Item = &'a T>,
        focus: Focus,
    ) -> RowsView<'a, T, S::Key>
    where
        S: SortedSource<Item = T> + ?Sized,
        T: 'a,
    {
        let window = self.calculator.window();
        let first = window.clamp_to(total).start;
        let rows = items
            .enumerate()
            .map(|(i, item)| Row {
                index: first + i,
                key: source.key_of(item),
                item,
            })
            .collect();
        RowsView {
            rows,
            window,
            total,
            content_height: self.geometry.content_height(total),
            offset_y: window.offset_px(self.geometry.row_height),
            focus,
        }
    }
}

impl<T: 'static> TableWindow<T> {
    /// Activates `table` on `host`.
    ///
    /// Resets the window to empty, syncs the viewport height, computes the initial window from
    /// the current scroll offset, then subscribes to resize and scroll events. The listeners
    /// hold only weak references to the table and the host. They stay registered until the
    /// returned [`Mount`] is released.
    ///
    /// The table is mutably borrowed while a listener runs, so `on_change` callbacks must not
    /// borrow it again.
    pub fn mount<H: Host + 'static>(table: &Rc<RefCell<Self>>, host: &Rc<H>) -> Mount<H> {
        {
            let mut t = table.borrow_mut();
            t.calculator.reset();
            t.calculator.set_viewport_height(host.viewport_height());
            t.on_scroll(host.scroll_offset());
        }

        let on_resize: Listener = {
            let table = Rc::downgrade(table);
            let host = Rc::downgrade(host);
            Rc::new(move || {
                let (Some(table), Some(host)) = (table.upgrade(), host.upgrade()) else {
                    vtrace!("resize after teardown");
                    return;
                };
                table
                    .borrow_mut()
                    .on_resize(host.viewport_height(), host.scroll_offset());
            })
        };
        let on_scroll: Listener = {
            let table = Rc::downgrade(table);
            let host = Rc::downgrade(host);
            Rc::new(move || {
                let (Some(table), Some(host)) = (table.upgrade(), host.upgrade()) else {
                    vtrace!("scroll after teardown");
                    return;
                };
                table.borrow_mut().on_scroll(host.scroll_offset());
            })
        };

        let listeners = vec![
            host.add_listener(HostEvent::Resize, on_resize),
            host.add_listener(HostEvent::Scroll, on_scroll),
        ];
        vdebug!(listeners = listeners.len(), "TableWindow mounted");
        Mount::new(Rc::clone(host), listeners)
    }
}

impl<T> core::fmt::Debug for TableWindow<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TableWindow")
            .field("geometry", &self.geometry)
            .field("resize_policy", &self.resize_policy)
            .field("calculator", &self.calculator)
            .field("filter", &self.filter)
            .field("last_focus", &self.last_focus.get())
            .finish_non_exhaustive()
    }
}
