use super::*;
use crate::interp::color::Rgba8;

#[test]
fn range_maps_eased_progress() {
    let r = ParamRange::new(40.0, 0.0, Ease::OutQuad);
    assert_eq!(r.value(0.0), 40.0);
    assert_eq!(r.value(1.0), 0.0);
    assert_eq!(r.value(0.5), 10.0);
}

#[test]
fn coupled_params_share_one_progress() {
    let local = 0.5;
    let translate_y = ParamRange::new(60.0, 0.0, Ease::OutCubic).value(local);
    let scale = ParamRange::new(0.9, 1.0, Ease::OutCubic).value(local);
    let opacity = ParamRange::new(0.0, 1.0, Ease::OutCubic).value(local);
    assert!((translate_y - 7.5).abs() < 1e-12);
    assert!((scale - 0.9875).abs() < 1e-12);
    assert!((opacity - 0.875).abs() < 1e-12);
}

#[test]
fn overshoot_ease_exceeds_target() {
    let r = ParamRange::new(0.0, 1.0, Ease::OutBack);
    assert!(r.value(0.8) > 1.0);
    assert_eq!(r.value(1.0), 1.0);
}

#[test]
fn color_ranges_interpolate() {
    let r = ParamRange::new(Rgba8::rgb(0, 0, 0), Rgba8::rgb(200, 100, 50), Ease::Linear);
    assert_eq!(r.value(0.5), Rgba8::rgb(100, 50, 25));
}

#[test]
fn non_finite_ranges_are_detected() {
    assert!(!ParamRange::new(f64::NAN, 1.0, Ease::Linear).is_finite());
    assert!(ParamRange::new(0.0, 1.0, Ease::Linear).is_finite());
}
