use super::*;

#[test]
fn closed_at_both_ends_and_flat_on_plateau() {
    for (a, b) in [(0.15, 0.6), (0.25, 0.8), (0.2, 0.2)] {
        assert_eq!(envelope(0.0, a, b), 0.0);
        assert!(envelope(1.0, a, b).abs() < 1e-12);
        for i in 0..=20 {
            let x = (a + (b - a) * f64::from(i) / 20.0).min(b);
            assert_eq!(envelope(x, a, b), 1.0, "x={x}");
        }
    }
}

#[test]
fn rising_edge_uses_in_quad() {
    assert!((envelope(0.1, 0.2, 0.7) - 0.25).abs() < 1e-12);
}

#[test]
fn falling_edge_mirrors_out_cubic() {
    // halfway through the fade-out: 1 - OutCubic(0.5) = 0.125
    assert!((envelope(0.8, 0.2, 0.6) - 0.125).abs() < 1e-12);
}

#[test]
fn stays_within_unit_interval() {
    let e = Envelope::new(0.2, 0.7).unwrap();
    for i in -10..=110 {
        let v = e.opacity(f64::from(i) / 100.0);
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn validate_rejects_inverted_or_open_envelopes() {
    assert!(Envelope::new(0.0, 0.5).is_err());
    assert!(Envelope::new(0.6, 0.5).is_err());
    assert!(Envelope::new(0.2, 1.0).is_err());
    assert!(Envelope::new(f64::NAN, 0.5).is_err());
}
