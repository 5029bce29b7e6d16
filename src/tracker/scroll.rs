use crate::foundation::{
    core::{ElementBounds, Viewport},
    math::clamp01,
};

/// How far the viewport has advanced through an element.
///
/// `clamp((viewport_height - top) / height, 0, 1)`: 0 while the element's top edge is at or
/// below the viewport bottom, 1 once the viewport bottom has travelled one element height
/// past the top edge. Zero-height elements step from 0 to 1 as their top crosses the bottom.
pub fn scroll_progress(bounds: ElementBounds, viewport: Viewport) -> f64 {
    let advanced = viewport.height - bounds.top;
    if bounds.height.is_nan() || bounds.height <= 0.0 {
        return if advanced > 0.0 { 1.0 } else { 0.0 };
    }
    clamp01(advanced / bounds.height)
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ScrollEvent {
    /// Document scroll offset in CSS pixels.
    Scroll { y: f64 },
    Resize(Viewport),
}

/// Progress of one section, recomputed at most once per animation frame.
///
/// Holds the last computed value so an unmounted element (no bounds) keeps reporting where
/// it was instead of jumping.
#[derive(Clone, Debug)]
pub struct ScrollProgressTracker {
    progress: f64,
    dirty: bool,
    recomputes: u64,
    last_scroll_y: Option<f64>,
}

impl Default for ScrollProgressTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollProgressTracker {
    pub fn new() -> Self {
        // dirty so the first frame after mount measures
        Self {
            progress: 0.0,
            dirty: true,
            recomputes: 0,
            last_scroll_y: None,
        }
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn recomputes(&self) -> u64 {
        self.recomputes
    }

    /// Mark the tracker for recomputation. A scroll event repeating the last seen offset
    /// changes nothing and is dropped; a resize always invalidates.
    pub fn notify(&mut self, event: ScrollEvent) {
        match event {
            ScrollEvent::Scroll { y } => {
                if self.last_scroll_y == Some(y) {
                    tracing::trace!(y, "scroll offset unchanged");
                    return;
                }
                self.last_scroll_y = Some(y);
                tracing::trace!(y, "scroll tracker invalidated");
            }
            ScrollEvent::Resize(viewport) => {
                tracing::trace!(
                    width = viewport.width,
                    height = viewport.height,
                    "scroll tracker invalidated by resize"
                );
            }
        }
        self.dirty = true;
    }

    /// Recompute only when an event arrived since the last frame.
    pub fn on_frame<F>(&mut self, measure: F) -> f64
    where
        F: FnOnce() -> (Option<ElementBounds>, Viewport),
    {
        if !self.dirty {
            return self.progress;
        }
        let (bounds, viewport) = measure();
        self.sample(bounds, viewport)
    }

    pub fn sample(&mut self, bounds: Option<ElementBounds>, viewport: Viewport) -> f64 {
        self.dirty = false;
        let Some(bounds) = bounds else {
            tracing::debug!(
                progress = self.progress,
                "element missing; keeping last progress"
            );
            return self.progress;
        };
        self.recomputes += 1;
        self.progress = scroll_progress(bounds, viewport);
        self.progress
    }

    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.dirty = true;
        self.last_scroll_y = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tracker/scroll.rs"]
mod tests;
