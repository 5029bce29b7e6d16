use std::collections::BTreeMap;

use crate::{
    foundation::math::round_to,
    scene::engine::{EvaluatedScene, VisualState},
};

/// Perspective applied to elements that turn around the vertical axis (the front door).
pub const PERSPECTIVE_PX: f64 = 1200.0;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderedScene {
    pub scene: String,
    pub nodes: Vec<RenderedNode>,
}

impl RenderedScene {
    pub fn node(&self, key: &str) -> Option<&RenderedNode> {
        self.nodes.iter().find(|n| n.key == key)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderedNode {
    pub key: String,
    pub style: BTreeMap<String, String>,
}

impl RenderedNode {
    pub fn style(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }

    /// `name: value; ...` in property order, ready for a `style` attribute.
    pub fn inline_style(&self) -> String {
        self.style
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Turns evaluated visual state into CSS declarations. Stateless.
pub struct SceneRenderer;

impl SceneRenderer {
    pub fn render(scene: &EvaluatedScene) -> RenderedScene {
        let nodes = if scene.active {
            scene
                .elements
                .iter()
                .map(|el| RenderedNode {
                    key: el.key(),
                    style: style_for(&el.visual),
                })
                .collect()
        } else {
            Vec::new()
        };
        RenderedScene {
            scene: scene.scene.clone(),
            nodes,
        }
    }
}

fn num(v: f64) -> String {
    round_to(v, 3).to_string()
}

fn transform_value(v: &VisualState) -> Option<String> {
    let t = &v.transform;
    if t.is_identity() && v.rotate_y_deg == 0.0 {
        return None;
    }

    let mut parts = Vec::new();
    if t.translate.x != 0.0 || t.translate.y != 0.0 {
        parts.push(format!(
            "translate({}px, {}px)",
            num(t.translate.x),
            num(t.translate.y)
        ));
    }
    if v.rotate_y_deg != 0.0 {
        parts.push(format!(
            "perspective({}px) rotateY({}deg)",
            num(PERSPECTIVE_PX),
            num(v.rotate_y_deg)
        ));
    }
    if t.rotation_deg != 0.0 {
        parts.push(format!("rotate({}deg)", num(t.rotation_deg)));
    }
    if t.scale.x != 1.0 || t.scale.y != 1.0 {
        if t.scale.x == t.scale.y {
            parts.push(format!("scale({})", num(t.scale.x)));
        } else {
            parts.push(format!("scale({}, {})", num(t.scale.x), num(t.scale.y)));
        }
    }
    Some(parts.join(" "))
}

pub fn style_for(v: &VisualState) -> BTreeMap<String, String> {
    let mut style = BTreeMap::new();
    style.insert("opacity".to_string(), num(v.opacity));

    if let Some(transform) = transform_value(v) {
        style.insert("transform".to_string(), transform);
    }

    if v.blur_px > 0.0 {
        style.insert("filter".to_string(), format!("blur({}px)", num(v.blur_px)));
    }
    if v.reveal < 1.0 {
        style.insert(
            "clip-path".to_string(),
            format!("inset(0 {}% 0 0)", num((1.0 - v.reveal) * 100.0)),
        );
    }
    if let Some(c) = v.color {
        style.insert("color".to_string(), c.to_css());
    }
    if let Some(c) = v.background {
        style.insert("background-color".to_string(), c.to_css());
    }
    style
}

#[cfg(test)]
#[path = "../../tests/unit/scene/render.rs"]
mod tests;
