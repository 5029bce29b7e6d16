use crate::{
    foundation::{
        core::Transform2D,
        error::ScrollResult,
        math::clamp01,
    },
    interp::color::Rgba8,
    scene::config::{ElementSpec, Profile, Property, SceneConfig},
};

#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedScene {
    pub scene: String,
    pub progress: f64,
    pub active: bool,
    pub elements: Vec<EvaluatedElement>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct EvaluatedElement {
    pub id: String,
    /// Position within a staggered group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub visual: VisualState,
}

impl EvaluatedElement {
    pub fn key(&self) -> String {
        match self.index {
            Some(i) => format!("{}-{i}", self.id),
            None => self.id.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VisualState {
    pub opacity: f64,
    pub transform: Transform2D,
    pub rotate_y_deg: f64,
    pub blur_px: f64,
    /// Fraction of the element left uncovered by its clip, from the left edge.
    pub reveal: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgba8>,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            transform: Transform2D::default(),
            rotate_y_deg: 0.0,
            blur_px: 0.0,
            reveal: 1.0,
            color: None,
            background: None,
        }
    }
}

enum Sampled {
    Scalar(f64),
    Color(Rgba8),
    Transform(Transform2D),
}

/// Stateless evaluator from a scene config and section progress to per-element visual state.
pub struct SceneEngine;

impl SceneEngine {
    /// Validate `config`, then evaluate it at `progress`.
    #[tracing::instrument(skip(config), fields(scene = %config.name))]
    pub fn eval(config: &SceneConfig, progress: f64) -> ScrollResult<EvaluatedScene> {
        Self::eval_impl(config, progress, true)
    }

    /// Evaluate a config the caller has already validated (the page validates every section
    /// once, at construction).
    pub(crate) fn eval_unchecked(
        config: &SceneConfig,
        progress: f64,
    ) -> ScrollResult<EvaluatedScene> {
        Self::eval_impl(config, progress, false)
    }

    fn eval_impl(
        config: &SceneConfig,
        progress: f64,
        validate_config: bool,
    ) -> ScrollResult<EvaluatedScene> {
        if validate_config {
            config.validate()?;
        }
        let progress = clamp01(progress);

        if progress < config.activation {
            return Ok(EvaluatedScene {
                scene: config.name.clone(),
                progress,
                active: false,
                elements: Vec::new(),
            });
        }

        let mut elements = Vec::with_capacity(config.elements.len());
        for el in &config.elements {
            match el.stagger {
                None => elements.push(EvaluatedElement {
                    id: el.id.clone(),
                    index: None,
                    visual: eval_element(el, progress, |local| local)?,
                }),
                Some(stagger) => {
                    for i in 0..stagger.count {
                        elements.push(EvaluatedElement {
                            id: el.id.clone(),
                            index: Some(i),
                            visual: eval_element(el, progress, |local| {
                                stagger.element_progress(i, local)
                            })?,
                        });
                    }
                }
            }
        }

        Ok(EvaluatedScene {
            scene: config.name.clone(),
            progress,
            active: true,
            elements,
        })
    }
}

fn eval_element<F>(el: &ElementSpec, progress: f64, remap: F) -> ScrollResult<VisualState>
where
    F: Fn(f64) -> f64,
{
    let mut v = VisualState::default();
    for track in &el.tracks {
        let local = remap(track.window.local(progress));
        apply(&mut v, track.property, sample(&track.profile, local)?);
    }
    v.opacity = clamp01(v.opacity);
    v.reveal = clamp01(v.reveal);
    v.blur_px = v.blur_px.max(0.0);
    Ok(v)
}

fn sample(profile: &Profile, local: f64) -> ScrollResult<Sampled> {
    Ok(match profile {
        Profile::Range(r) => Sampled::Scalar(r.value(local)),
        Profile::Envelope(e) => Sampled::Scalar(e.opacity(local)),
        Profile::Stops(s) => Sampled::Scalar(s.sample(local)?),
        Profile::ColorRange(r) => Sampled::Color(r.value(local)),
        Profile::ColorStops(s) => Sampled::Color(s.sample(local)?),
        Profile::HslRange(r) => Sampled::Color(r.value(local).to_rgba8()),
        Profile::TransformRange(r) => Sampled::Transform(r.value(local)),
    })
}

fn apply(v: &mut VisualState, property: Property, sampled: Sampled) {
    match sampled {
        Sampled::Scalar(x) => apply_scalar(v, property, x),
        Sampled::Color(c) => match property {
            Property::Background => v.background = Some(c),
            _ => v.color = Some(c),
        },
        Sampled::Transform(t) => v.transform = v.transform.compose(t),
    }
}

fn apply_scalar(v: &mut VisualState, property: Property, x: f64) {
    match property {
        Property::Opacity => v.opacity *= x,
        Property::TranslateX => v.transform.translate.x += x,
        Property::TranslateY => v.transform.translate.y += x,
        Property::Scale => {
            v.transform.scale.x *= x;
            v.transform.scale.y *= x;
        }
        Property::Rotate => v.transform.rotation_deg += x,
        Property::RotateY => v.rotate_y_deg += x,
        Property::Blur => v.blur_px += x,
        Property::Reveal => v.reveal *= x,
        Property::Color | Property::Background | Property::Transform => {}
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/engine.rs"]
mod tests;
