use crate::foundation::core::{Transform2D, Vec2};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Transform2D {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            translate: <Vec2 as Lerp>::lerp(&a.translate, &b.translate, t),
            rotation_deg: a.rotation_deg + (b.rotation_deg - a.rotation_deg) * t,
            scale: <Vec2 as Lerp>::lerp(&a.scale, &b.scale, t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/lerp.rs"]
mod tests;
