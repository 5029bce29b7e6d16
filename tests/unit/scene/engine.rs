use super::*;
use crate::{
    animation::ease::Ease,
    foundation::core::Vec2,
    interp::{envelope::Envelope, param::ParamRange},
    scene::config::Track,
    timeline::{stagger::Stagger, window::TimelineWindow},
};

fn track(property: Property, start: f64, end: f64, from: f64, to: f64, ease: Ease) -> Track {
    Track {
        property,
        window: TimelineWindow::new(start, end).unwrap(),
        profile: Profile::Range(ParamRange::new(from, to, ease)),
    }
}

fn scene() -> SceneConfig {
    SceneConfig {
        name: "test".to_string(),
        activation: 0.2,
        elements: vec![
            ElementSpec {
                id: "card".to_string(),
                stagger: None,
                tracks: vec![
                    track(Property::TranslateY, 0.2, 0.6, 60.0, 0.0, Ease::OutCubic),
                    track(Property::Scale, 0.2, 0.6, 0.9, 1.0, Ease::OutCubic),
                    track(Property::Opacity, 0.2, 0.6, 0.0, 1.0, Ease::Linear),
                    Track {
                        property: Property::Opacity,
                        window: TimelineWindow::new(0.2, 1.0).unwrap(),
                        profile: Profile::Envelope(Envelope::new(0.1, 0.8).unwrap()),
                    },
                ],
            },
            ElementSpec {
                id: "dot".to_string(),
                stagger: Some(Stagger {
                    count: 4,
                    delay_step: 0.1,
                }),
                tracks: vec![track(Property::Opacity, 0.5, 1.0, 0.0, 1.0, Ease::Linear)],
            },
        ],
    }
}

#[test]
fn below_activation_renders_nothing() {
    let out = SceneEngine::eval(&scene(), 0.1).unwrap();
    assert!(!out.active);
    assert!(out.elements.is_empty());
}

#[test]
fn coupled_tracks_share_progress() {
    let out = SceneEngine::eval(&scene(), 0.4).unwrap();
    assert!(out.active);
    let card = &out.elements[0];
    assert_eq!(card.key(), "card");
    // local 0.5 on the 0.2..0.6 window; OutCubic(0.5) = 0.875
    assert!((card.visual.transform.translate.y - 7.5).abs() < 1e-9);
    assert!((card.visual.transform.scale.x - 0.9875).abs() < 1e-9);
    assert_eq!(card.visual.transform.scale.x, card.visual.transform.scale.y);
    // opacity tracks multiply: 0.5 (linear) * 1.0 (envelope plateau)
    assert!((card.visual.opacity - 0.5).abs() < 1e-9);
}

#[test]
fn staggered_elements_expand_in_order() {
    let out = SceneEngine::eval(&scene(), 0.75).unwrap();
    let dots: Vec<_> = out.elements.iter().filter(|e| e.id == "dot").collect();
    assert_eq!(dots.len(), 4);
    assert_eq!(dots[3].key(), "dot-3");
    for pair in dots.windows(2) {
        assert!(pair[1].visual.opacity <= pair[0].visual.opacity);
    }
}

#[test]
fn progress_is_clamped() {
    let out = SceneEngine::eval(&scene(), 3.0).unwrap();
    assert_eq!(out.progress, 1.0);
    assert!(out.elements.iter().all(|e| e.visual.opacity.is_finite()));
}

#[test]
fn invalid_config_is_rejected() {
    let mut s = scene();
    s.name = String::new();
    assert!(SceneEngine::eval(&s, 0.5).is_err());
}

#[test]
fn transform_tracks_compose_with_scalar_tracks() {
    let s = SceneConfig {
        name: "t".to_string(),
        activation: 0.0,
        elements: vec![ElementSpec {
            id: "panel".to_string(),
            stagger: None,
            tracks: vec![
                track(Property::TranslateY, 0.0, 1.0, 0.0, 10.0, Ease::Linear),
                Track {
                    property: Property::Transform,
                    window: TimelineWindow::new(0.0, 1.0).unwrap(),
                    profile: Profile::TransformRange(ParamRange::new(
                        Transform2D::default(),
                        Transform2D {
                            translate: Vec2::new(20.0, -40.0),
                            rotation_deg: 90.0,
                            scale: Vec2::new(3.0, 1.0),
                        },
                        Ease::Linear,
                    )),
                },
            ],
        }],
    };
    let out = SceneEngine::eval(&s, 0.5).unwrap();
    let t = out.elements[0].visual.transform;
    assert_eq!(t.translate, Vec2::new(10.0, -15.0));
    assert_eq!(t.rotation_deg, 45.0);
    assert_eq!(t.scale, Vec2::new(2.0, 1.0));
}

#[test]
fn unchecked_eval_skips_validation() {
    let mut s = scene();
    s.elements[1].id = "card".to_string();
    assert!(SceneEngine::eval(&s, 0.5).is_err());

    let out = SceneEngine::eval_unchecked(&scene(), 0.4).unwrap();
    let checked = SceneEngine::eval(&scene(), 0.4).unwrap();
    assert_eq!(out.elements.len(), checked.elements.len());
    assert_eq!(out.elements[0].visual, checked.elements[0].visual);
    assert!(SceneEngine::eval_unchecked(&s, 0.5).is_ok());
}
