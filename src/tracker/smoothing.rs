use std::{
    cell::{Cell, RefCell},
    collections::BTreeSet,
    rc::Rc,
};

use crate::foundation::error::{ScrollError, ScrollResult};

const SETTLE_EPS: f64 = 1e-4;

/// Exponential damping toward a moving target: `value += (target - value) * damping`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoother {
    value: f64,
    target: f64,
    damping: f64,
}

impl Smoother {
    pub fn new(damping: f64) -> ScrollResult<Self> {
        if !damping.is_finite() || damping <= 0.0 || damping > 1.0 {
            return Err(ScrollError::validation(format!(
                "damping {damping} must lie in (0, 1]"
            )));
        }
        Ok(Self {
            value: 0.0,
            target: 0.0,
            damping,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }

    /// Advance one frame. Snaps onto the target once within a small epsilon.
    pub fn tick(&mut self) -> f64 {
        self.value += (self.target - self.value) * self.damping;
        if (self.target - self.value).abs() < SETTLE_EPS {
            self.value = self.target;
        }
        self.value
    }

    pub fn reset(&mut self, value: f64) {
        self.value = value;
        self.target = value;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(pub u64);

/// Host animation-frame queue (`requestAnimationFrame` / `cancelAnimationFrame`).
pub trait FrameScheduler {
    fn request_frame(&self) -> FrameHandle;
    fn cancel_frame(&self, handle: FrameHandle);
}

/// In-process frame queue for headless hosts and tests.
#[derive(Debug, Default)]
pub struct ManualFrames {
    next: Cell<u64>,
    pending: RefCell<BTreeSet<FrameHandle>>,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Vec<FrameHandle> {
        self.pending.borrow().iter().copied().collect()
    }

    /// Remove and return the oldest pending request, as the host would when a frame fires.
    pub fn fire_next(&self) -> Option<FrameHandle> {
        self.pending.borrow_mut().pop_first()
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&self) -> FrameHandle {
        let h = FrameHandle(self.next.get());
        self.next.set(h.0 + 1);
        self.pending.borrow_mut().insert(h);
        h
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.pending.borrow_mut().remove(&handle);
    }
}

/// Self-rescheduling smoothing loop. Keeps at most one frame request outstanding and
/// cancels it on [`FrameLoop::stop`] or drop.
pub struct FrameLoop<S: FrameScheduler> {
    smoother: Smoother,
    scheduler: Rc<S>,
    pending: Option<FrameHandle>,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(smoother: Smoother, scheduler: Rc<S>) -> Self {
        Self {
            smoother,
            scheduler,
            pending: None,
        }
    }

    pub fn value(&self) -> f64 {
        self.smoother.value()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn is_settled(&self) -> bool {
        self.smoother.is_settled()
    }

    pub fn set_target(&mut self, target: f64) {
        self.smoother.set_target(target);
        if !self.smoother.is_settled() && self.pending.is_none() {
            self.pending = Some(self.scheduler.request_frame());
        }
    }

    /// Host callback for a fired frame. Frames this loop did not request are ignored.
    pub fn on_frame(&mut self, handle: FrameHandle) -> f64 {
        if self.pending != Some(handle) {
            return self.smoother.value();
        }
        self.pending = None;
        let v = self.smoother.tick();
        if !self.smoother.is_settled() {
            self.pending = Some(self.scheduler.request_frame());
        }
        v
    }

    pub fn stop(&mut self) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel_frame(h);
            tracing::trace!(handle = h.0, "frame loop cancelled");
        }
    }

    /// Cancel any pending frame and jump straight to `value`.
    pub fn reset(&mut self, value: f64) {
        self.stop();
        self.smoother.reset(value);
    }
}

impl<S: FrameScheduler> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tracker/smoothing.rs"]
mod tests;
