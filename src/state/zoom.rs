use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::{animation::ease::Ease, foundation::math::clamp01};

/// Fraction of the zoom during which the persistent nav bar fades out.
pub const NAV_FADE_SPAN: f64 = 0.25;

type Subscriber = Rc<dyn Fn(f64)>;

#[derive(Default)]
struct Shared {
    value: Cell<f64>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(u64, Subscriber)>>,
}

impl Shared {
    fn publish(&self, v: f64) {
        let snapshot: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, s)| Rc::clone(s))
            .collect();
        for s in snapshot {
            s(v);
        }
    }
}

/// Page-wide zoom progress shared between the scene that drives the zoom and the readers
/// that react to it (the nav bar). Starts at 0.
pub struct ZoomChannel;

impl ZoomChannel {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> (ZoomWriter, ZoomReader) {
        let shared = Rc::new(Shared::default());
        (
            ZoomWriter {
                shared: Rc::clone(&shared),
            },
            ZoomReader { shared },
        )
    }
}

/// Sole write capability. Not `Clone`: exactly one scene controls the zoom at a time.
pub struct ZoomWriter {
    shared: Rc<Shared>,
}

impl ZoomWriter {
    /// Publish a new value (clamped to `[0, 1]`); subscribers hear only actual changes.
    pub fn set(&self, value: f64) {
        let v = clamp01(value);
        if self.shared.value.get() == v {
            return;
        }
        self.shared.value.set(v);
        self.shared.publish(v);
    }

    pub fn reset(&self) {
        tracing::debug!(from = self.shared.value.get(), "zoom progress reset");
        self.set(0.0);
    }

    pub fn get(&self) -> f64 {
        self.shared.value.get()
    }

    pub fn reader(&self) -> ZoomReader {
        ZoomReader {
            shared: Rc::clone(&self.shared),
        }
    }
}

#[derive(Clone)]
pub struct ZoomReader {
    shared: Rc<Shared>,
}

impl ZoomReader {
    pub fn get(&self) -> f64 {
        self.shared.value.get()
    }

    /// Nav bar opacity: fully visible at zoom 0, gone once the zoom passes `NAV_FADE_SPAN`.
    pub fn nav_opacity(&self) -> f64 {
        1.0 - Ease::OutQuad.apply(self.get() / NAV_FADE_SPAN)
    }

    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<F>(&self, f: F) -> ZoomSubscription
    where
        F: Fn(f64) + 'static,
    {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(f)));
        ZoomSubscription {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.subscribers.borrow().len()
    }
}

pub struct ZoomSubscription {
    id: u64,
    shared: Weak<Shared>,
}

impl Drop for ZoomSubscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.subscribers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/zoom.rs"]
mod tests;
