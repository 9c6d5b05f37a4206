use super::*;

#[test]
fn body_omits_missing_instruction() {
    let body = serde_json::to_value(generate_body("hi", None)).unwrap();
    assert_eq!(body, serde_json::json!({ "prompt": "hi" }));

    let body = serde_json::to_value(generate_body("hi", Some("Be brief."))).unwrap();
    assert_eq!(body["system_instruction"], "Be brief.");
}

#[test]
fn only_the_latest_ticket_is_current() {
    let seq = RequestSequencer::new();
    let first = seq.begin();
    let second = seq.begin();
    assert!(!seq.is_current(first));
    assert!(seq.is_current(second));

    let shared = seq.clone();
    let third = shared.begin();
    assert!(!seq.is_current(second));
    assert!(seq.is_current(third));
}

#[test]
fn invalidate_discards_in_flight() {
    let seq = RequestSequencer::new();
    let ticket = seq.begin();
    seq.invalidate();
    assert!(!seq.is_current(ticket));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn off_browser_generate_returns_failure_reply() {
    let text = block_on(generate("hello", None));
    assert_eq!(text, FAILURE_REPLY);
}

#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn off_browser_ask_settles_immediately() {
    let owner = Owner::new();
    owner.with(|| {
        let seq = RequestSequencer::new();
        let loading = RwSignal::new(false);
        let output = RwSignal::new(String::new());
        ask(&seq, "ideas".to_owned(), None, loading, output);
        assert!(!loading.get_untracked());
        assert_eq!(output.get_untracked(), FAILURE_REPLY);
        assert!(seq.is_current(1));
    });
}
