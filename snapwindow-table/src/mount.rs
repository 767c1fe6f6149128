use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use crate::{Host, ListenerId};

/// The subscriptions a mounted table holds on its host.
///
/// Created by [`crate::TableWindow::mount`]. Releasing it (via [`Mount::unmount`] or by
/// dropping it) removes every listener exactly once; after that no host event reaches the
/// table.
#[must_use = "dropping a Mount unsubscribes the table immediately"]
pub struct Mount<H: Host> {
    host: Rc<H>,
    listeners: Vec<ListenerId>,
}

impl<H: Host> Mount<H> {
    pub(crate) fn new(host: Rc<H>, listeners: Vec<ListenerId>) -> Self {
        Self { host, listeners }
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    pub fn listener_ids(&self) -> &[ListenerId] {
        &self.listeners
    }

    pub fn unmount(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        for id in self.listeners.drain(..) {
            let removed = self.host.remove_listener(id);
            debug_assert!(removed, "Mount: listener {id:?} was already removed");
        }
        vdebug!("TableWindow unmounted");
    }
}

impl<H: Host> Drop for Mount<H> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<H: Host> fmt::Debug for Mount<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mount")
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}
