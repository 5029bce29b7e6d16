use crate::{
    animation::ease::Ease,
    foundation::{
        error::{ScrollError, ScrollResult},
        math::clamp01,
    },
};

/// Fade-in / hold / fade-out opacity over a local progress.
///
/// Rises with `InQuad` until `fade_in_end`, holds at 1 through `fade_out_start`, then falls
/// with the mirror of `OutCubic`. With `0 < fade_in_end <= fade_out_start < 1` the result is 0
/// at both ends and exactly 1 on the plateau.
pub fn envelope(local: f64, fade_in_end: f64, fade_out_start: f64) -> f64 {
    let local = clamp01(local);
    if local < fade_in_end {
        return Ease::InQuad.apply(local / fade_in_end);
    }
    if local <= fade_out_start {
        return 1.0;
    }
    if fade_out_start >= 1.0 {
        return 1.0;
    }
    1.0 - Ease::OutCubic.apply((local - fade_out_start) / (1.0 - fade_out_start))
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Envelope {
    pub fade_in_end: f64,
    pub fade_out_start: f64,
}

impl Envelope {
    pub fn new(fade_in_end: f64, fade_out_start: f64) -> ScrollResult<Self> {
        let e = Self {
            fade_in_end,
            fade_out_start,
        };
        e.validate()?;
        Ok(e)
    }

    pub fn validate(&self) -> ScrollResult<()> {
        let Self {
            fade_in_end,
            fade_out_start,
        } = *self;
        if !(fade_in_end.is_finite() && fade_out_start.is_finite()) {
            return Err(ScrollError::validation("envelope bounds must be finite"));
        }
        if !(0.0 < fade_in_end && fade_in_end <= fade_out_start && fade_out_start < 1.0) {
            return Err(ScrollError::validation(format!(
                "envelope needs 0 < fade_in_end ({fade_in_end}) <= fade_out_start ({fade_out_start}) < 1"
            )));
        }
        Ok(())
    }

    pub fn opacity(&self, local: f64) -> f64 {
        envelope(local, self.fade_in_end, self.fade_out_start)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interp/envelope.rs"]
mod tests;
