use super::*;

#[test]
fn viewport_rejects_degenerate_sizes() {
    assert!(Viewport::new(0.0, 800.0).is_err());
    assert!(Viewport::new(1200.0, f64::NAN).is_err());
    assert!(Viewport::new(1200.0, 800.0).is_ok());
}

#[test]
fn viewport_parses_wxh() {
    let v = Viewport::parse("390x844").unwrap();
    assert_eq!(v.width, 390.0);
    assert_eq!(v.height, 844.0);
    assert!(Viewport::parse("390").is_err());
    assert!(Viewport::parse("ax844").is_err());
}

#[test]
fn transform_compose_adds_offsets_and_multiplies_scale() {
    let base = Transform2D::default();
    assert!(base.is_identity());
    assert!(base.compose(Transform2D::default()).is_identity());

    let a = Transform2D {
        translate: Vec2::new(10.0, -2.5),
        rotation_deg: 15.0,
        scale: Vec2::new(2.0, 1.0),
    };
    let b = Transform2D {
        translate: Vec2::new(-4.0, 2.5),
        rotation_deg: 30.0,
        scale: Vec2::new(1.5, 3.0),
    };
    let c = a.compose(b);
    assert_eq!(c.translate, Vec2::new(6.0, 0.0));
    assert_eq!(c.rotation_deg, 45.0);
    assert_eq!(c.scale, Vec2::new(3.0, 3.0));
    assert!(c.is_finite());

    let bad = Transform2D {
        rotation_deg: f64::NAN,
        ..Transform2D::default()
    };
    assert!(!bad.is_finite());
}
