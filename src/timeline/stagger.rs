use crate::foundation::{
    error::{ScrollError, ScrollResult},
    math::clamp01,
};

/// Per-index delay applied to a group of similar elements (particles, stars, letters).
///
/// Element `i` starts `i * delay_step` into the group progress and runs over the span that
/// remains after the last element's delay, so every element finishes exactly at 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stagger {
    pub count: usize,
    pub delay_step: f64,
}

impl Stagger {
    pub fn new(count: usize, delay_step: f64) -> ScrollResult<Self> {
        let s = Self { count, delay_step };
        s.validate()?;
        Ok(s)
    }

    /// One element per character of `text` (whitespace included, it keeps spacing stable).
    pub fn for_text(text: &str, delay_step: f64) -> ScrollResult<Self> {
        Self::new(text.chars().count(), delay_step)
    }

    pub fn validate(&self) -> ScrollResult<()> {
        if self.count == 0 {
            return Err(ScrollError::validation("stagger count must be > 0"));
        }
        if !self.delay_step.is_finite() || self.delay_step < 0.0 {
            return Err(ScrollError::validation(
                "stagger delay_step must be finite and >= 0",
            ));
        }
        if self.remaining_span() <= 0.0 {
            return Err(ScrollError::validation(format!(
                "stagger of {} elements with delay {} leaves no span to animate",
                self.count, self.delay_step
            )));
        }
        Ok(())
    }

    pub fn remaining_span(&self) -> f64 {
        1.0 - self.count.saturating_sub(1) as f64 * self.delay_step
    }

    pub fn element_progress(&self, index: usize, group_progress: f64) -> f64 {
        let span = self.remaining_span();
        if span <= 0.0 {
            return if group_progress >= 1.0 { 1.0 } else { 0.0 };
        }
        clamp01((group_progress - index as f64 * self.delay_step) / span)
    }

    pub fn all(&self, group_progress: f64) -> Vec<f64> {
        (0..self.count)
            .map(|i| self.element_progress(i, group_progress))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/stagger.rs"]
mod tests;
