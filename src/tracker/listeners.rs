use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::tracker::scroll::ScrollEvent;

type Callback = Rc<RefCell<dyn FnMut(ScrollEvent)>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Default)]
struct Inner {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, Callback)>>,
}

/// Scroll/resize event source for one window.
///
/// Listeners stay registered only as long as their [`ListenerGuard`] lives, so a section
/// that unmounts on any path releases its subscription.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<Inner>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "dropping the guard unsubscribes immediately"]
    pub fn subscribe<F>(&self, f: F) -> ListenerGuard
    where
        F: FnMut(ScrollEvent) + 'static,
    {
        let id = ListenerId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(RefCell::new(f))));
        tracing::trace!(id = id.0, "listener registered");
        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver to a snapshot of current listeners; listeners may (un)subscribe while running.
    pub fn dispatch(&self, event: ScrollEvent) {
        let snapshot: Vec<Callback> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for cb in snapshot {
            if let Ok(mut f) = cb.try_borrow_mut() {
                f(event);
            }
        }
    }
}

pub struct ListenerGuard {
    id: ListenerId,
    registry: Weak<Inner>,
}

impl ListenerGuard {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            inner.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
            tracing::trace!(id = self.id.0, "listener removed");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tracker/listeners.rs"]
mod tests;
