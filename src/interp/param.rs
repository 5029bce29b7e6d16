use crate::animation::{ease::Ease, lerp::Lerp};

/// `from + ease(local) * (to - from)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParamRange<T> {
    pub from: T,
    pub to: T,
    #[serde(default)]
    pub ease: Ease,
}

impl<T> ParamRange<T>
where
    T: Lerp,
{
    pub fn new(from: T, to: T, ease: Ease) -> Self {
        Self { from, to, ease }
    }

    pub fn value(&self, local: f64) -> T {
        T::lerp(&self.from, &self.to, self.ease.apply(local))
    }
}

impl ParamRange<f64> {
    pub fn is_finite(&self) -> bool {
        self.from.is_finite() && self.to.is_finite()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/param.rs"]
mod tests;
