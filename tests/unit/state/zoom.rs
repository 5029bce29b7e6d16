use std::{cell::RefCell, rc::Rc};

use super::*;

#[test]
fn starts_at_zero_and_broadcasts_changes() {
    let (writer, reader) = ZoomChannel::new();
    assert_eq!(reader.get(), 0.0);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let s1 = Rc::clone(&seen);
    let _a = reader.subscribe(move |v| s1.borrow_mut().push(("a", v)));
    let other = reader.clone();
    let s2 = Rc::clone(&seen);
    let _b = other.subscribe(move |v| s2.borrow_mut().push(("b", v)));

    writer.set(0.4);
    writer.set(0.4);
    writer.set(2.0);

    assert_eq!(
        *seen.borrow(),
        vec![("a", 0.4), ("b", 0.4), ("a", 1.0), ("b", 1.0)]
    );
    assert_eq!(other.get(), 1.0);
}

#[test]
fn reset_returns_to_zero() {
    let (writer, reader) = ZoomChannel::new();
    writer.set(0.7);
    writer.reset();
    assert_eq!(reader.get(), 0.0);
    assert_eq!(writer.get(), 0.0);
}

#[test]
fn dropped_subscription_stops_delivery() {
    let (writer, reader) = ZoomChannel::new();
    let hits = Rc::new(RefCell::new(0));
    let h = Rc::clone(&hits);
    let sub = reader.subscribe(move |_| *h.borrow_mut() += 1);
    writer.set(0.1);
    drop(sub);
    assert_eq!(reader.subscriber_count(), 0);
    writer.set(0.2);
    assert_eq!(*hits.borrow(), 1);
}

#[test]
fn nav_fades_over_leading_span() {
    let (writer, reader) = ZoomChannel::new();
    assert_eq!(reader.nav_opacity(), 1.0);
    writer.set(NAV_FADE_SPAN / 2.0);
    assert!((reader.nav_opacity() - 0.25).abs() < 1e-12);
    writer.set(0.9);
    assert_eq!(reader.nav_opacity(), 0.0);
    assert_eq!(writer.reader().nav_opacity(), 0.0);
}
