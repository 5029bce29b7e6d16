use std::collections::BTreeSet;

use crate::{
    animation::stops::Stops,
    foundation::{
        core::Transform2D,
        error::{ScrollError, ScrollResult},
    },
    interp::{
        color::{Hsl, Rgba8},
        envelope::Envelope,
        param::ParamRange,
    },
    timeline::{
        stagger::Stagger,
        window::{Timeline, TimelineWindow},
    },
};

/// Declarative timing table for one scene, consumed by [`crate::SceneEngine`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneConfig {
    pub name: String,
    /// Below this section progress the scene renders nothing.
    #[serde(default)]
    pub activation: f64,
    pub elements: Vec<ElementSpec>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementSpec {
    pub id: String,
    /// Repeat the element `count` times, each delayed by `delay_step` of its track windows.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stagger: Option<Stagger>,
    pub tracks: Vec<Track>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track {
    pub property: Property,
    pub window: TimelineWindow,
    pub profile: Profile,
}

/// Animated visual property. Tracks targeting the same property combine: opacity, scale and
/// reveal multiply; offsets, rotations and blur add; colors take the last track. A
/// `transform` track composes onto the scalar ones (offsets add, scales multiply).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Opacity,
    TranslateX,
    TranslateY,
    Scale,
    Rotate,
    RotateY,
    Blur,
    Reveal,
    Color,
    Background,
    Transform,
}

/// What a property consumes and a profile produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Color,
    Transform,
}

impl Property {
    pub fn kind(self) -> ValueKind {
        match self {
            Self::Color | Self::Background => ValueKind::Color,
            Self::Transform => ValueKind::Transform,
            _ => ValueKind::Scalar,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Opacity => "opacity",
            Self::TranslateX => "translate_x",
            Self::TranslateY => "translate_y",
            Self::Scale => "scale",
            Self::Rotate => "rotate",
            Self::RotateY => "rotate_y",
            Self::Blur => "blur",
            Self::Reveal => "reveal",
            Self::Color => "color",
            Self::Background => "background",
            Self::Transform => "transform",
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Profile {
    Range(ParamRange<f64>),
    Envelope(Envelope),
    Stops(Stops<f64>),
    ColorRange(ParamRange<Rgba8>),
    ColorStops(Stops<Rgba8>),
    HslRange(ParamRange<Hsl>),
    TransformRange(ParamRange<Transform2D>),
}

impl Profile {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Range(_) | Self::Envelope(_) | Self::Stops(_) => ValueKind::Scalar,
            Self::ColorRange(_) | Self::ColorStops(_) | Self::HslRange(_) => ValueKind::Color,
            Self::TransformRange(_) => ValueKind::Transform,
        }
    }

    pub fn validate(&self) -> ScrollResult<()> {
        match self {
            Self::Range(r) => {
                if !r.is_finite() {
                    return Err(ScrollError::validation("range endpoints must be finite"));
                }
                Ok(())
            }
            Self::Envelope(e) => e.validate(),
            Self::Stops(s) => {
                s.validate()?;
                if s.keys.iter().any(|k| !k.value.is_finite()) {
                    return Err(ScrollError::validation("stop values must be finite"));
                }
                Ok(())
            }
            Self::ColorStops(s) => s.validate(),
            Self::TransformRange(r) => {
                if !r.from.is_finite() || !r.to.is_finite() {
                    return Err(ScrollError::validation("transform endpoints must be finite"));
                }
                Ok(())
            }
            Self::ColorRange(_) | Self::HslRange(_) => Ok(()),
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> ScrollResult<()> {
        if self.name.trim().is_empty() {
            return Err(ScrollError::scene("scene name must be non-empty"));
        }
        if !self.activation.is_finite() || !(0.0..=1.0).contains(&self.activation) {
            return Err(ScrollError::scene(format!(
                "scene '{}' activation must lie in [0, 1]",
                self.name
            )));
        }

        let mut ids = BTreeSet::new();
        for el in &self.elements {
            if el.id.trim().is_empty() {
                return Err(ScrollError::scene(format!(
                    "scene '{}' has an element without id",
                    self.name
                )));
            }
            if !ids.insert(el.id.as_str()) {
                return Err(ScrollError::scene(format!(
                    "scene '{}' has duplicate element id '{}'",
                    self.name, el.id
                )));
            }
            if let Some(stagger) = &el.stagger {
                stagger.validate()?;
            }
            for track in &el.tracks {
                if track.property.kind() != track.profile.kind() {
                    return Err(ScrollError::scene(format!(
                        "element '{}': property '{}' does not match its profile kind",
                        el.id,
                        track.property.name()
                    )));
                }
                track.profile.validate()?;
            }
        }
        Ok(())
    }

    pub fn element(&self, id: &str) -> Option<&ElementSpec> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Every track window, named `element.property` (suffixed `#n` on repeats).
    pub fn timeline(&self) -> ScrollResult<Timeline> {
        let mut tl = Timeline::new();
        for el in &self.elements {
            for track in &el.tracks {
                let base = format!("{}.{}", el.id, track.property.name());
                let mut name = base.clone();
                let mut n = 1;
                while tl.window(&name).is_some() {
                    n += 1;
                    name = format!("{base}#{n}");
                }
                tl.push(name, track.window)?;
            }
        }
        Ok(tl)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
