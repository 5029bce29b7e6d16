use super::*;

#[test]
fn scalar_lerp_hits_endpoints_and_extrapolates() {
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, 0.0), 2.0);
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, 1.0), 6.0);
    assert_eq!(<f64 as Lerp>::lerp(&2.0, &6.0, 0.25), 3.0);
    // Overshoot easings feed t > 1.
    assert_eq!(<f64 as Lerp>::lerp(&0.0, &10.0, 1.1), 11.0);
}

#[test]
fn transform_lerp_is_componentwise() {
    let a = Transform2D::default();
    let b = Transform2D {
        translate: Vec2::new(0.0, -40.0),
        rotation_deg: 90.0,
        scale: Vec2::new(2.0, 2.0),
    };
    let mid = <Transform2D as Lerp>::lerp(&a, &b, 0.5);
    assert_eq!(mid.translate, Vec2::new(0.0, -20.0));
    assert_eq!(mid.rotation_deg, 45.0);
    assert_eq!(mid.scale, Vec2::new(1.5, 1.5));
}
