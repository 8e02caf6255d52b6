#![cfg(not(feature = "hydrate"))]

use super::*;
use std::cell::Cell;
use std::rc::Rc;

fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let hits = Rc::new(Cell::new(0));
    let hits_cb = Rc::clone(&hits);
    (hits, move || hits_cb.set(hits_cb.get() + 1))
}

#[test]
fn callback_does_not_run_on_start() {
    let (hits, cb) = counter();
    let _timer = ScopedTimeout::start(100, cb);
    assert_eq!(hits.get(), 0);
}

#[test]
fn elapse_runs_callback_exactly_once() {
    let (hits, cb) = counter();
    let mut timer = ScopedTimeout::start(100, cb);
    assert!(timer.elapse());
    assert!(!timer.elapse());
    assert_eq!(hits.get(), 1);
}

#[test]
fn cancel_prevents_callback() {
    let (hits, cb) = counter();
    let timer = ScopedTimeout::start(100, cb);
    timer.cancel();
    assert_eq!(hits.get(), 0);
}

#[test]
fn drop_releases_callback() {
    let (hits, cb) = counter();
    {
        let _timer = ScopedTimeout::start(100, cb);
    }
    assert_eq!(hits.get(), 0);
    // The parked closure (and its clone of the counter) is gone.
    assert_eq!(Rc::strong_count(&hits), 1);
}
