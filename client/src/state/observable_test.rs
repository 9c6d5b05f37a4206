use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

#[test]
fn clones_share_the_value() {
    let a = Observable::new(1);
    let b = a.clone();
    b.set(5);
    assert_eq!(a.get(), 5);
}

#[test]
fn subscribers_see_every_write_in_order() {
    let obs = Observable::new(String::new());
    let log = Arc::new(Mutex::new(Vec::new()));

    let first = Arc::clone(&log);
    obs.subscribe(move |v: &String| first.lock().unwrap().push(format!("a:{v}")));
    let second = Arc::clone(&log);
    obs.subscribe(move |v: &String| second.lock().unwrap().push(format!("b:{v}")));

    obs.set("x".to_owned());
    obs.update(|v| v.push('y'));

    assert_eq!(*log.lock().unwrap(), vec!["a:x", "b:x", "a:xy", "b:xy"]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let obs = Observable::new(0);
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let id = obs.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    obs.set(1);
    assert!(obs.unsubscribe(id));
    assert!(!obs.unsubscribe(id));
    obs.set(2);

    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(obs.subscriber_count(), 0);
}

#[test]
fn subscriber_may_read_the_observable_without_deadlock() {
    let obs = Observable::new(0);
    let seen = Arc::new(AtomicUsize::new(0));
    let reader = obs.clone();
    let sink = Arc::clone(&seen);
    obs.subscribe(move |_| {
        sink.store(reader.get(), Ordering::SeqCst);
    });
    obs.set(7);
    assert_eq!(seen.load(Ordering::SeqCst), 7);
}

#[test]
fn with_borrows_value() {
    let obs = Observable::new(vec![1, 2, 3]);
    assert_eq!(obs.with(Vec::len), 3);
}
