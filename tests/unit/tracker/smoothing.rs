use super::*;

#[test]
fn smoother_converges_and_snaps() {
    let mut s = Smoother::new(0.2).unwrap();
    s.set_target(1.0);
    let first = s.tick();
    assert!((first - 0.2).abs() < 1e-12);
    for _ in 0..200 {
        s.tick();
    }
    assert!(s.is_settled());
    assert_eq!(s.value(), 1.0);
}

#[test]
fn smoother_rejects_bad_damping() {
    assert!(Smoother::new(0.0).is_err());
    assert!(Smoother::new(1.5).is_err());
    assert!(Smoother::new(f64::NAN).is_err());
    assert!(Smoother::new(1.0).is_ok());
}

#[test]
fn loop_reschedules_until_settled() {
    let frames = Rc::new(ManualFrames::new());
    let mut l = FrameLoop::new(Smoother::new(0.5).unwrap(), Rc::clone(&frames));
    l.set_target(1.0);
    assert_eq!(frames.pending().len(), 1);

    let mut ticks = 0;
    while let Some(h) = frames.fire_next() {
        l.on_frame(h);
        ticks += 1;
        assert!(frames.pending().len() <= 1);
        assert!(ticks < 100);
    }
    assert_eq!(l.value(), 1.0);
    assert!(l.pending().is_none());
}

#[test]
fn retargeting_does_not_stack_requests() {
    let frames = Rc::new(ManualFrames::new());
    let mut l = FrameLoop::new(Smoother::new(0.3).unwrap(), Rc::clone(&frames));
    l.set_target(0.4);
    l.set_target(0.8);
    l.set_target(0.6);
    assert_eq!(frames.pending().len(), 1);
}

#[test]
fn drop_cancels_pending_frame() {
    let frames = Rc::new(ManualFrames::new());
    {
        let mut l = FrameLoop::new(Smoother::new(0.3).unwrap(), Rc::clone(&frames));
        l.set_target(1.0);
        assert_eq!(frames.pending().len(), 1);
    }
    assert!(frames.pending().is_empty());
}

#[test]
fn foreign_frames_are_ignored() {
    let frames = Rc::new(ManualFrames::new());
    let mut l = FrameLoop::new(Smoother::new(0.5).unwrap(), Rc::clone(&frames));
    l.set_target(1.0);
    assert_eq!(l.on_frame(FrameHandle(999)), 0.0);
    assert!(l.pending().is_some());
}

#[test]
fn reset_cancels_and_settles() {
    let frames = Rc::new(ManualFrames::new());
    let mut l = FrameLoop::new(Smoother::new(0.3).unwrap(), Rc::clone(&frames));
    l.set_target(1.0);
    assert!(!l.is_settled());
    l.reset(0.0);
    assert!(frames.pending().is_empty());
    assert!(l.pending().is_none());
    assert!(l.is_settled());
    assert_eq!(l.value(), 0.0);
}
