use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

/// Host notifications a table subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostEvent {
    Scroll,
    Resize,
}

/// Handle for a registered listener, used to remove it again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

pub type Listener = Rc<dyn Fn()>;

/// The environment a table is mounted into: a scroll container with process-wide
/// scroll/resize notifications.
///
/// Everything runs on the host's event loop thread. Listeners read the current scroll offset
/// and viewport height back through the same trait.
pub trait Host {
    fn scroll_offset(&self) -> u64;
    fn viewport_height(&self) -> u32;
    fn add_listener(&self, event: HostEvent, listener: Listener) -> ListenerId;
    /// Returns `false` if `id` was not registered.
    fn remove_listener(&self, id: ListenerId) -> bool;
}

/// An in-memory [`Host`].
///
/// Useful for headless embedders (TUI loops, tests, simulations): call [`EventHub::scroll_to`]
/// and [`EventHub::resize`] from your own event source and every subscribed listener runs
/// synchronously, in registration order.
pub struct EventHub {
    scroll_offset: Cell<u64>,
    viewport_height: Cell<u32>,
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, HostEvent, Listener)>>,
}

impl EventHub {
    pub fn new(viewport_height: u32) -> Self {
        Self {
            scroll_offset: Cell::new(0),
            viewport_height: Cell::new(viewport_height),
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        }
    }

    /// Moves the scroll position and dispatches [`HostEvent::Scroll`].
    pub fn scroll_to(&self, offset: u64) -> usize {
        self.scroll_offset.set(offset);
        self.dispatch(HostEvent::Scroll)
    }

    /// Changes the viewport height and dispatches [`HostEvent::Resize`].
    pub fn resize(&self, viewport_height: u32) -> usize {
        self.viewport_height.set(viewport_height);
        self.dispatch(HostEvent::Resize)
    }

    /// Runs every listener subscribed to `event`. Returns how many ran.
    ///
    /// Listeners may add or remove listeners while running. A listener removed during a
    /// dispatch does not run for the rest of it; one added during a dispatch first runs on the
    /// next one.
    pub fn dispatch(&self, event: HostEvent) -> usize {
        let pending: Vec<(ListenerId, Listener)> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(_, e, _)| *e == event)
            .map(|(id, _, l)| (*id, Rc::clone(l)))
            .collect();
        let mut ran = 0;
        for (id, listener) in &pending {
            if !self.is_registered(*id) {
                continue;
            }
            listener();
            ran += 1;
        }
        ran
    }

    fn is_registered(&self, id: ListenerId) -> bool {
        self.listeners.borrow().iter().any(|(l, _, _)| *l == id)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn listener_count_for(&self, event: HostEvent) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(_, e, _)| *e == event)
            .count()
    }
}

impl Host for EventHub {
    fn scroll_offset(&self) -> u64 {
        self.scroll_offset.get()
    }

    fn viewport_height(&self) -> u32 {
        self.viewport_height.get()
    }

    fn add_listener(&self, event: HostEvent, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0.wrapping_add(1));
        self.listeners.borrow_mut().push((id, event, listener));
        id
    }

    fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(l, _, _)| *l != id);
        listeners.len() != before
    }
}

impl fmt::Debug for EventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHub")
            .field("scroll_offset", &self.scroll_offset.get())
            .field("viewport_height", &self.viewport_height.get())
            .field("listeners", &self.listener_count())
            .finish()
    }
}
