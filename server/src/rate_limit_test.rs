use std::net::Ipv4Addr;

use super::*;

fn ip(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
}

fn limiter(per_client_limit: usize, global_limit: usize) -> RateLimiter {
    RateLimiter::new(RateLimitConfig { per_client_limit, global_limit, window_secs: 60 })
}

#[test]
fn per_client_allows_up_to_limit() {
    let rl = limiter(3, 100);
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at(ip(1), now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at(ip(1), now),
        Err(RateLimitError::PerClientExceeded { limit: 3, window_secs: 60 })
    );
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter(100, 4);
    let now = Instant::now();

    // Distinct clients so the per-client limit is never the one hit.
    for i in 0..4 {
        assert!(rl.check_and_record_at(ip(i), now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(rl.check_and_record_at(ip(9), now), Err(RateLimitError::GlobalExceeded { limit: 4, window_secs: 60 }));
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = limiter(2, 100);
    let start = Instant::now();

    rl.check_and_record_at(ip(1), start).unwrap();
    rl.check_and_record_at(ip(1), start).unwrap();
    assert!(rl.check_and_record_at(ip(1), start).is_err());

    let after_window = start + Duration::from_secs(60) + Duration::from_millis(1);
    assert!(rl.check_and_record_at(ip(1), after_window).is_ok());
}

#[test]
fn distinct_clients_do_not_interfere() {
    let rl = limiter(1, 100);
    let now = Instant::now();

    rl.check_and_record_at(ip(1), now).unwrap();
    assert!(rl.check_and_record_at(ip(1), now).is_err());
    assert!(rl.check_and_record_at(ip(2), now).is_ok());
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = limiter(1, 2);
    let now = Instant::now();

    rl.check_and_record_at(ip(1), now).unwrap();
    assert!(rl.check_and_record_at(ip(1), now).is_err());
    // The rejected retry did not eat global quota.
    assert!(rl.check_and_record_at(ip(2), now).is_ok());
}

#[test]
fn idle_clients_are_swept_when_the_map_grows() {
    let rl = limiter(5, usize::MAX);
    let start = Instant::now();
    for i in 0..=SWEEP_THRESHOLD {
        let addr = IpAddr::V4(Ipv4Addr::from(u32::try_from(i).unwrap()));
        rl.check_and_record_at(addr, start).unwrap();
    }
    assert_eq!(rl.tracked_clients(), SWEEP_THRESHOLD + 1);

    let later = start + Duration::from_secs(120);
    rl.check_and_record_at(ip(250), later).unwrap();
    assert_eq!(rl.tracked_clients(), 1);
}
