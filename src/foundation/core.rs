use crate::foundation::error::{ScrollError, ScrollResult};

pub use kurbo::Vec2;

/// Viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> ScrollResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ScrollError::validation(
                "viewport width/height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Parse `WIDTHxHEIGHT`, e.g. `1440x900`.
    pub fn parse(s: &str) -> ScrollResult<Self> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| ScrollError::validation(format!("viewport '{s}' is not WxH")))?;
        let w: f64 = w
            .trim()
            .parse()
            .map_err(|_| ScrollError::validation(format!("bad viewport width '{w}'")))?;
        let h: f64 = h
            .trim()
            .parse()
            .map_err(|_| ScrollError::validation(format!("bad viewport height '{h}'")))?;
        Self::new(w, h)
    }
}

/// Element box relative to the viewport top, as `getBoundingClientRect` reports it.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementBounds {
    pub top: f64,
    pub height: f64,
}

impl ElementBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    pub translate: Vec2,
    pub rotation_deg: f64,
    pub scale: Vec2, // default (1,1)
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_deg: 0.0,
            scale: Vec2::new(1.0, 1.0),
        }
    }
}

impl Transform2D {
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    pub fn is_finite(&self) -> bool {
        self.translate.is_finite() && self.rotation_deg.is_finite() && self.scale.is_finite()
    }

    /// Stack `other` onto `self`: offsets and rotation add, scales multiply.
    pub fn compose(self, other: Transform2D) -> Transform2D {
        Transform2D {
            translate: self.translate + other.translate,
            rotation_deg: self.rotation_deg + other.rotation_deg,
            scale: Vec2::new(self.scale.x * other.scale.x, self.scale.y * other.scale.y),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
