use std::sync::{Arc, Mutex};

use toolkit::ai::{FAILURE_REPLY, MISSING_KEY_REPLY};

use super::*;
use crate::ai::{AiError, TextGenerator};
use crate::config::RateLimitConfig;
use crate::rate_limit::RateLimiter;

/// Replays canned outcomes and records the prompts it was given.
struct MockGenerator {
    outcomes: Mutex<Vec<Result<String, AiError>>>,
    seen: Mutex<Vec<(String, Option<String>)>>,
}

impl MockGenerator {
    fn new(outcomes: Vec<Result<String, AiError>>) -> Arc<Self> {
        Arc::new(Self { outcomes: Mutex::new(outcomes), seen: Mutex::new(Vec::new()) })
    }
}

#[async_trait::async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str, system_instruction: Option<&str>) -> Result<String, AiError> {
        self.seen
            .lock()
            .unwrap()
            .push((prompt.to_owned(), system_instruction.map(str::to_owned)));
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() { Ok("done".into()) } else { outcomes.remove(0) }
    }
}

fn state_with(generator: Arc<MockGenerator>, per_client_limit: usize) -> AppState {
    AppState::new(
        generator,
        RateLimiter::new(RateLimitConfig { per_client_limit, global_limit: 100, window_secs: 60 }),
    )
}

fn request(prompt: &str, system: Option<&str>) -> GenerateRequest {
    GenerateRequest { prompt: prompt.into(), system_instruction: system.map(str::to_owned) }
}

fn client() -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(192, 168, 1, 20))
}

// =============================================================================
// generate_reply
// =============================================================================

#[tokio::test]
async fn forwards_prompt_and_instruction() {
    let generator = MockGenerator::new(vec![Ok("A crisp rewrite.".into())]);
    let state = state_with(generator.clone(), 10);

    let (status, reply) = generate_reply(&state, client(), &request("rewrite me", Some("Be helpful."))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply.text, "A crisp rewrite.");
    let seen = generator.seen.lock().unwrap();
    assert_eq!(seen.as_slice(), &[("rewrite me".to_owned(), Some("Be helpful.".to_owned()))]);
}

#[tokio::test]
async fn failures_come_back_as_text_with_ok_status() {
    let generator = MockGenerator::new(vec![
        Err(AiError::MissingApiKey),
        Err(AiError::ApiRequest("connection reset".into())),
        Err(AiError::Empty),
    ]);
    let state = state_with(generator, 10);

    let (status, reply) = generate_reply(&state, client(), &request("a", None)).await;
    assert_eq!((status, reply.text.as_str()), (StatusCode::OK, MISSING_KEY_REPLY));
    let (status, reply) = generate_reply(&state, client(), &request("b", None)).await;
    assert_eq!((status, reply.text.as_str()), (StatusCode::OK, FAILURE_REPLY));
    let (status, reply) = generate_reply(&state, client(), &request("c", None)).await;
    assert_eq!((status, reply.text.as_str()), (StatusCode::OK, EMPTY_REPLY));
}

#[tokio::test]
async fn blank_prompt_skips_the_generator() {
    let generator = MockGenerator::new(Vec::new());
    let state = state_with(generator.clone(), 10);

    let (status, reply) = generate_reply(&state, client(), &request("   ", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply.text, EMPTY_REPLY);
    assert!(generator.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn rate_limited_client_gets_429_and_the_limit_reply() {
    let generator = MockGenerator::new(Vec::new());
    let state = state_with(generator.clone(), 1);

    let (status, _) = generate_reply(&state, client(), &request("first", None)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, reply) = generate_reply(&state, client(), &request("second", None)).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(reply.text, RATE_LIMITED_REPLY);
    assert_eq!(generator.seen.lock().unwrap().len(), 1);
}

// =============================================================================
// forwarded_client
// =============================================================================

#[test]
fn forwarded_header_uses_first_hop() {
    assert_eq!(forwarded_client("203.0.113.7, 10.0.0.1"), Some(IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7))));
    assert_eq!(forwarded_client(" 2001:db8::1 "), Some("2001:db8::1".parse().unwrap()));
    assert_eq!(forwarded_client("not-an-ip"), None);
    assert_eq!(forwarded_client(""), None);
}

// =============================================================================
// ClientIp
// =============================================================================

fn parts_from(peer: SocketAddr, forwarded_for: &str) -> Parts {
    let (mut parts, ()) = axum::http::Request::builder()
        .uri("/api/ai/generate")
        .header("x-forwarded-for", forwarded_for)
        .body(())
        .unwrap()
        .into_parts();
    parts.extensions.insert(ConnectInfo(peer));
    parts
}

#[tokio::test]
async fn rotating_forwarded_header_does_not_reset_quota() {
    let generator = MockGenerator::new(Vec::new());
    let state = state_with(generator.clone(), 1);
    let peer: SocketAddr = "198.51.100.9:50000".parse().unwrap();

    let mut statuses = Vec::new();
    for spoofed in ["203.0.113.1", "203.0.113.2", "203.0.113.3"] {
        let mut parts = parts_from(peer, spoofed);
        let Ok(ClientIp(ip)) = ClientIp::from_request_parts(&mut parts, &state).await;
        assert_eq!(ip, peer.ip());
        statuses.push(generate_reply(&state, ip, &request("hi", None)).await.0);
    }

    assert_eq!(statuses, [StatusCode::OK, StatusCode::TOO_MANY_REQUESTS, StatusCode::TOO_MANY_REQUESTS]);
    assert_eq!(generator.seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn trusted_proxy_keys_on_forwarded_header() {
    let state = state_with(MockGenerator::new(Vec::new()), 1).trusting_forwarded_for(true);
    let peer: SocketAddr = "10.0.0.2:443".parse().unwrap();

    let mut parts = parts_from(peer, "203.0.113.7, 10.0.0.2");
    let Ok(ClientIp(ip)) = ClientIp::from_request_parts(&mut parts, &state).await;
    assert_eq!(ip, IpAddr::V4(Ipv4Addr::new(203, 0, 113, 7)));

    let mut parts = parts_from(peer, "garbage");
    let Ok(ClientIp(ip)) = ClientIp::from_request_parts(&mut parts, &state).await;
    assert_eq!(ip, peer.ip());
}

#[test]
fn missing_peer_falls_back_to_unspecified() {
    assert_eq!(client_key(&HeaderMap::new(), None, false), IpAddr::V4(Ipv4Addr::UNSPECIFIED));
}
