use crate::{
    animation::{ease::Ease, lerp::Lerp},
    foundation::error::{ScrollError, ScrollResult},
};

/// Piecewise profile keyed by progress. Used for multi-stage blends (sky colors, sun height)
/// where a single `from -> to` range is not enough.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stops<T> {
    pub keys: Vec<Stop<T>>, // sorted by `at`
    #[serde(default)]
    pub mode: InterpMode,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stop<T> {
    pub at: f64,
    pub value: T,
    #[serde(default)]
    pub ease: Ease, // ease applied toward next stop
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpMode {
    Hold,
    #[default]
    Linear,
}

impl<T> Stops<T>
where
    T: Lerp + Clone,
{
    pub fn linear(keys: impl IntoIterator<Item = (f64, T, Ease)>) -> Self {
        Self {
            keys: keys
                .into_iter()
                .map(|(at, value, ease)| Stop { at, value, ease })
                .collect(),
            mode: InterpMode::Linear,
        }
    }

    pub fn validate(&self) -> ScrollResult<()> {
        if self.keys.is_empty() {
            return Err(ScrollError::validation("stops must have at least one key"));
        }
        if self
            .keys
            .iter()
            .any(|k| !k.at.is_finite() || !(0.0..=1.0).contains(&k.at))
        {
            return Err(ScrollError::validation("stop positions must lie in [0, 1]"));
        }
        if !self.keys.windows(2).all(|w| w[0].at <= w[1].at) {
            return Err(ScrollError::validation("stops must be sorted by position"));
        }
        Ok(())
    }

    pub fn sample(&self, progress: f64) -> ScrollResult<T> {
        let Some(first) = self.keys.first() else {
            return Err(ScrollError::validation("stops has no keys"));
        };

        let idx = self.keys.partition_point(|k| k.at <= progress);

        if idx == 0 {
            return Ok(first.value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let span = b.at - a.at;
        if span <= 0.0 {
            return Ok(a.value.clone());
        }

        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => {
                let t = a.ease.apply((progress - a.at) / span);
                Ok(T::lerp(&a.value, &b.value, t))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/stops.rs"]
mod tests;
