use super::*;

#[test]
fn scenario_values() {
    assert_eq!(local_progress(0.5, 0.25, 0.45), 1.0);
    assert_eq!(local_progress(0.10, 0.25, 0.45), 0.0);
    assert!((local_progress(0.35, 0.25, 0.45) - 0.5).abs() < 1e-12);
}

#[test]
fn local_progress_is_bounded_and_monotonic() {
    let w = TimelineWindow::new(0.2, 0.7).unwrap();
    let mut prev = 0.0;
    for i in 0..=200 {
        let p = f64::from(i) / 200.0;
        let l = w.local(p);
        assert!((0.0..=1.0).contains(&l));
        assert!(l >= prev);
        prev = l;
    }
    assert_eq!(w.local(0.2), 0.0);
    assert_eq!(w.local(0.7), 1.0);
}

#[test]
fn out_of_range_progress_clamps_at_window_bounds() {
    let w = TimelineWindow::new(0.1, 0.3).unwrap();
    assert_eq!(w.local(-5.0), 0.0);
    assert_eq!(w.local(5.0), 1.0);
    assert_eq!(w.local(f64::NAN), 0.0);
}

#[test]
fn degenerate_windows_are_rejected() {
    assert!(TimelineWindow::new(0.4, 0.4).is_err());
    assert!(TimelineWindow::new(0.5, 0.4).is_err());
    assert!(TimelineWindow::new(-0.1, 0.4).is_err());
    assert!(TimelineWindow::new(0.1, 1.2).is_err());
    assert!(TimelineWindow::new(f64::NAN, 0.4).is_err());
}

#[test]
fn raw_degenerate_window_is_a_step() {
    assert_eq!(local_progress(0.39, 0.4, 0.4), 0.0);
    assert_eq!(local_progress(0.4, 0.4, 0.4), 1.0);
}

#[test]
fn segment_preserves_order_with_overlaps_and_gaps() {
    let windows = [
        TimelineWindow::new(0.0, 0.5).unwrap(),
        TimelineWindow::new(0.25, 0.75).unwrap(),
        TimelineWindow::new(0.8, 1.0).unwrap(),
    ];
    let out = segment(0.5, &windows);
    assert_eq!(out, vec![1.0, 0.5, 0.0]);
}

#[test]
fn split_produces_contiguous_windows() {
    let parts = TimelineWindow::new(0.2, 0.7).unwrap().split(10).unwrap();
    assert_eq!(parts.len(), 10);
    assert_eq!(parts[0].start(), 0.2);
    assert_eq!(parts[9].end(), 0.7);
    for pair in parts.windows(2) {
        assert!((pair[0].end() - pair[1].start()).abs() < 1e-12);
    }
    assert!(TimelineWindow::FULL.split(0).is_err());
}

#[test]
fn named_timeline_lookup() {
    let tl = Timeline::new()
        .with("fade", TimelineWindow::new(0.0, 0.2).unwrap())
        .unwrap()
        .with("slide", TimelineWindow::new(0.1, 0.6).unwrap())
        .unwrap();
    assert_eq!(tl.len(), 2);
    assert_eq!(tl.local("fade", 0.1), Some(0.5));
    assert_eq!(tl.local("missing", 0.1), None);
    let seg = tl.segment(0.35);
    assert_eq!(seg.len(), 2);
    assert_eq!(seg[0], ("fade", 1.0));
    assert_eq!(seg[1].0, "slide");
    assert!((seg[1].1 - 0.5).abs() < 1e-12);

    let dup = Timeline::new()
        .with("a", TimelineWindow::FULL)
        .unwrap()
        .with("a", TimelineWindow::FULL);
    assert!(dup.is_err());
}

#[test]
fn deserialize_validates_bounds() {
    let ok: TimelineWindow = serde_json::from_str(r#"{"start":0.1,"end":0.2}"#).unwrap();
    assert_eq!(ok.start(), 0.1);
    assert!(serde_json::from_str::<TimelineWindow>(r#"{"start":0.3,"end":0.2}"#).is_err());
}
