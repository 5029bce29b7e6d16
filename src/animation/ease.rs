use crate::foundation::error::{ScrollError, ScrollResult};

const BACK_C1: f64 = 1.70158;
const BACK_C3: f64 = BACK_C1 + 1.0;

/// Named easing curves. Every member maps 0 to 0 and 1 to 1; input is clamped to `[0, 1]`.
///
/// `OutBack` is the only member whose output leaves `[0, 1]`: it overshoots past 1 late in
/// the curve and settles back, which the scenes use for bounce-in effects.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Ease {
    #[default]
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "easeInQuad")]
    InQuad,
    #[serde(rename = "easeOutQuad")]
    OutQuad,
    #[serde(rename = "easeInOutQuad")]
    InOutQuad,
    #[serde(rename = "easeInCubic")]
    InCubic,
    #[serde(rename = "easeOutCubic")]
    OutCubic,
    #[serde(rename = "easeInOutCubic")]
    InOutCubic,
    #[serde(rename = "easeOutQuart")]
    OutQuart,
    #[serde(rename = "easeOutQuint")]
    OutQuint,
    #[serde(rename = "easeOutExpo")]
    OutExpo,
    #[serde(rename = "easeOutBack")]
    OutBack,
}

impl Ease {
    pub const ALL: [Ease; 11] = [
        Ease::Linear,
        Ease::InQuad,
        Ease::OutQuad,
        Ease::InOutQuad,
        Ease::InCubic,
        Ease::OutCubic,
        Ease::InOutCubic,
        Ease::OutQuart,
        Ease::OutQuint,
        Ease::OutExpo,
        Ease::OutBack,
    ];

    pub fn apply(self, t: f64) -> f64 {
        let t = crate::foundation::math::clamp01(t);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::OutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::OutBack => {
                let u = t - 1.0;
                1.0 + BACK_C3 * u.powi(3) + BACK_C1 * u.powi(2)
            }
        }
    }

    /// Whether the curve may leave `[0, 1]` inside the unit interval.
    pub fn overshoots(self) -> bool {
        matches!(self, Self::OutBack)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "easeInQuad",
            Self::OutQuad => "easeOutQuad",
            Self::InOutQuad => "easeInOutQuad",
            Self::InCubic => "easeInCubic",
            Self::OutCubic => "easeOutCubic",
            Self::InOutCubic => "easeInOutCubic",
            Self::OutQuart => "easeOutQuart",
            Self::OutQuint => "easeOutQuint",
            Self::OutExpo => "easeOutExpo",
            Self::OutBack => "easeOutBack",
        }
    }

    /// Accepts the serde names (`easeOutQuad`) and short kebab names (`out-quad`).
    pub fn from_name(name: &str) -> ScrollResult<Self> {
        let key: String = name
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let key = key.strip_prefix("ease").unwrap_or(&key);
        Self::ALL
            .into_iter()
            .find(|e| {
                let canon = e.name().to_ascii_lowercase();
                canon.strip_prefix("ease").unwrap_or(&canon) == key
            })
            .ok_or_else(|| ScrollError::validation(format!("unknown easing '{name}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
