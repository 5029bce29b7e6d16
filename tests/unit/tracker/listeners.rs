use std::{cell::RefCell, rc::Rc};

use super::*;

#[test]
fn dispatch_reaches_live_listeners_only() {
    let reg = ListenerRegistry::new();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let s = Rc::clone(&seen);
    let guard = reg.subscribe(move |ev| s.borrow_mut().push(ev));
    assert_eq!(reg.len(), 1);

    reg.dispatch(ScrollEvent::Scroll { y: 1.0 });
    drop(guard);
    assert!(reg.is_empty());
    reg.dispatch(ScrollEvent::Scroll { y: 2.0 });

    assert_eq!(*seen.borrow(), vec![ScrollEvent::Scroll { y: 1.0 }]);
}

#[test]
fn early_return_paths_release_listener() {
    fn mount_and_bail(reg: &ListenerRegistry, bail: bool) -> Option<ListenerGuard> {
        let guard = reg.subscribe(|_| {});
        if bail {
            return None;
        }
        Some(guard)
    }

    let reg = ListenerRegistry::new();
    assert!(mount_and_bail(&reg, true).is_none());
    assert!(reg.is_empty());

    let kept = mount_and_bail(&reg, false);
    assert_eq!(reg.len(), 1);
    drop(kept);
    assert!(reg.is_empty());
}

#[test]
fn listener_may_unsubscribe_during_dispatch() {
    let reg = ListenerRegistry::new();
    let slot: Rc<RefCell<Option<ListenerGuard>>> = Rc::new(RefCell::new(None));
    let calls = Rc::new(RefCell::new(0));

    let slot_in = Rc::clone(&slot);
    let calls_in = Rc::clone(&calls);
    let guard = reg.subscribe(move |_| {
        *calls_in.borrow_mut() += 1;
        slot_in.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(guard);

    reg.dispatch(ScrollEvent::Scroll { y: 0.0 });
    reg.dispatch(ScrollEvent::Scroll { y: 0.0 });
    assert_eq!(*calls.borrow(), 1);
    assert!(reg.is_empty());
}

#[test]
fn guard_outliving_registry_is_harmless() {
    let reg = ListenerRegistry::new();
    let guard = reg.subscribe(|_| {});
    drop(reg);
    drop(guard);
}
