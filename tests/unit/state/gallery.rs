use super::*;

fn reveal() -> GalleryReveal {
    GalleryReveal::new(GalleryConfig::default()).unwrap()
}

#[test]
fn full_forward_sequence() {
    let mut g = reveal();
    assert!(!g.is_visible());

    assert_eq!(g.observe_progress(0.05), Transition::Ignored);

    let t = g.observe_progress(0.2);
    assert_eq!(
        t,
        Transition::Advanced {
            from: RevealState::Hidden,
            to: RevealState::Revealing {
                first_image_ready: false
            },
            schedule: Some(TimerRequest {
                timer: GalleryTimer::FirstImage,
                delay_ms: 300
            }),
        }
    );
    assert!(g.is_visible());
    assert!(!g.first_image_ready());

    let t = g.handle(RevealTrigger::TimerElapsed(GalleryTimer::FirstImage));
    assert!(matches!(
        t,
        Transition::Advanced {
            schedule: Some(TimerRequest {
                timer: GalleryTimer::EnableScroll,
                ..
            }),
            ..
        }
    ));
    assert!(g.first_image_ready());
    assert!(!g.is_scroll_enabled());

    g.handle(RevealTrigger::TimerElapsed(GalleryTimer::EnableScroll));
    assert_eq!(g.state(), RevealState::Interactive);
    assert!(g.is_scroll_enabled());
}

#[test]
fn threshold_fires_once() {
    let mut g = reveal();
    assert!(matches!(g.observe_progress(0.5), Transition::Advanced { .. }));
    assert_eq!(g.observe_progress(0.9), Transition::Ignored);
    // scrolling back up never hides the gallery again
    assert_eq!(g.observe_progress(0.0), Transition::Ignored);
    assert!(g.is_visible());
}

#[test]
fn out_of_order_timers_are_ignored() {
    let mut g = reveal();
    assert_eq!(
        g.handle(RevealTrigger::TimerElapsed(GalleryTimer::FirstImage)),
        Transition::Ignored
    );
    g.observe_progress(1.0);
    assert_eq!(
        g.handle(RevealTrigger::TimerElapsed(GalleryTimer::EnableScroll)),
        Transition::Ignored
    );
    g.handle(RevealTrigger::TimerElapsed(GalleryTimer::FirstImage));
    assert_eq!(
        g.handle(RevealTrigger::TimerElapsed(GalleryTimer::FirstImage)),
        Transition::Ignored
    );
}

#[test]
fn rejects_threshold_outside_unit_interval() {
    let cfg = GalleryConfig {
        threshold: 1.5,
        ..GalleryConfig::default()
    };
    assert!(GalleryReveal::new(cfg).is_err());
}

#[test]
fn state_serializes_with_tag() {
    let s = serde_json::to_string(&RevealState::Revealing {
        first_image_ready: true,
    })
    .unwrap();
    assert_eq!(s, r#"{"state":"revealing","first_image_ready":true}"#);
}
