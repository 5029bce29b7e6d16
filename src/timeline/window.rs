use crate::foundation::{
    error::{ScrollError, ScrollResult},
    math::clamp01,
};

/// Local progress of `progress` inside `[start, end]`.
///
/// Total over all reals: 0 before the window opens, 1 once it has closed. A degenerate
/// window (`start >= end`) behaves as a step at `start`; [`TimelineWindow::new`] refuses to
/// build one, so this branch only serves raw callers.
pub fn local_progress(progress: f64, start: f64, end: f64) -> f64 {
    if progress.is_nan() {
        return 0.0;
    }
    if end <= start {
        return if progress >= start { 1.0 } else { 0.0 };
    }
    if progress < start {
        return 0.0;
    }
    if progress >= end {
        return 1.0;
    }
    clamp01((progress - start) / (end - start))
}

/// Sub-range of a parent progress during which one element animates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TimelineWindow {
    start: f64,
    end: f64,
}

impl TimelineWindow {
    pub const FULL: TimelineWindow = TimelineWindow {
        start: 0.0,
        end: 1.0,
    };

    pub fn new(start: f64, end: f64) -> ScrollResult<Self> {
        if !(start.is_finite() && end.is_finite()) {
            return Err(ScrollError::timeline("window bounds must be finite"));
        }
        if start < 0.0 || end > 1.0 {
            return Err(ScrollError::timeline(format!(
                "window [{start}, {end}] must lie within [0, 1]"
            )));
        }
        if start >= end {
            return Err(ScrollError::timeline(format!(
                "window [{start}, {end}] must have start < end"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(self) -> f64 {
        self.start
    }

    pub fn end(self) -> f64 {
        self.end
    }

    pub fn span(self) -> f64 {
        self.end - self.start
    }

    pub fn contains(self, progress: f64) -> bool {
        self.start <= progress && progress < self.end
    }

    pub fn local(self, progress: f64) -> f64 {
        local_progress(progress, self.start, self.end)
    }

    /// Split into `n` contiguous windows of equal span.
    pub fn split(self, n: usize) -> ScrollResult<Vec<TimelineWindow>> {
        if n == 0 {
            return Err(ScrollError::timeline("cannot split a window into 0 parts"));
        }
        let step = self.span() / n as f64;
        (0..n)
            .map(|i| {
                let start = self.start + step * i as f64;
                let end = if i + 1 == n {
                    self.end
                } else {
                    self.start + step * (i + 1) as f64
                };
                TimelineWindow::new(start, end)
            })
            .collect()
    }
}

impl<'de> serde::Deserialize<'de> for TimelineWindow {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            start: f64,
            end: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        TimelineWindow::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

/// Local progress for each window, in window order.
pub fn segment(progress: f64, windows: &[TimelineWindow]) -> Vec<f64> {
    windows.iter().map(|w| w.local(progress)).collect()
}

/// Ordered, named windows of one scene.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Timeline {
    entries: Vec<(String, TimelineWindow)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, window: TimelineWindow) -> ScrollResult<Self> {
        self.push(name, window)?;
        Ok(self)
    }

    pub fn push(&mut self, name: impl Into<String>, window: TimelineWindow) -> ScrollResult<()> {
        let name = name.into();
        if self.entries.iter().any(|(n, _)| *n == name) {
            return Err(ScrollError::timeline(format!(
                "duplicate window name '{name}'"
            )));
        }
        self.entries.push((name, window));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn window(&self, name: &str) -> Option<TimelineWindow> {
        self.entries
            .iter()
            .find_map(|(n, w)| (n == name).then_some(*w))
    }

    pub fn local(&self, name: &str, progress: f64) -> Option<f64> {
        self.window(name).map(|w| w.local(progress))
    }

    pub fn segment(&self, progress: f64) -> Vec<(&str, f64)> {
        self.entries
            .iter()
            .map(|(n, w)| (n.as_str(), w.local(progress)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/window.rs"]
mod tests;
