//! `POST /api/ai/generate`: rate-limited proxy to the text generator.
//!
//! Well-formed requests always get `{ "text": ... }` back, failures
//! included, so the browser can render the reply without an error branch.
//! Rate-limited requests carry the same body with status 429.

use std::convert::Infallible;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use axum::Json;
use axum::extract::{ConnectInfo, FromRequestParts, State};
use axum::http::{HeaderMap, StatusCode};
use axum::http::request::Parts;
use toolkit::ai::{EMPTY_REPLY, GenerateRequest, GenerateResponse, RATE_LIMITED_REPLY};

use crate::ai::reply_for;
use crate::state::AppState;

// =============================================================================
// CLIENT ADDRESS
// =============================================================================

/// Address used as the per-client rate-limit key: the socket peer, or the
/// first hop of `X-Forwarded-For` when the server sits behind a trusted
/// proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub IpAddr);

impl FromRequestParts<AppState> for ClientIp {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());
        Ok(Self(client_key(&parts.headers, peer, state.trust_forwarded_for)))
    }
}

/// The header is caller-controlled, so it only counts when a proxy in front
/// of the server is known to overwrite it.
pub(crate) fn client_key(headers: &HeaderMap, peer: Option<IpAddr>, trust_forwarded_for: bool) -> IpAddr {
    let forwarded = if trust_forwarded_for {
        headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(forwarded_client)
    } else {
        None
    };
    forwarded.or(peer).unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
}

pub(crate) fn forwarded_client(header: &str) -> Option<IpAddr> {
    header.split(',').next().and_then(|first| first.trim().parse().ok())
}

// =============================================================================
// HANDLER
// =============================================================================

pub async fn generate(
    State(state): State<AppState>,
    ClientIp(client): ClientIp,
    Json(request): Json<GenerateRequest>,
) -> (StatusCode, Json<GenerateResponse>) {
    let (status, reply) = generate_reply(&state, client, &request).await;
    (status, Json(reply))
}

pub(crate) async fn generate_reply(
    state: &AppState,
    client: IpAddr,
    request: &GenerateRequest,
) -> (StatusCode, GenerateResponse) {
    if let Err(e) = state.rate_limiter.check_and_record(client) {
        tracing::warn!(%client, error = %e, "ai request rate limited");
        return (StatusCode::TOO_MANY_REQUESTS, GenerateResponse { text: RATE_LIMITED_REPLY.to_owned() });
    }
    if request.prompt.trim().is_empty() {
        return (StatusCode::OK, GenerateResponse { text: EMPTY_REPLY.to_owned() });
    }

    tracing::info!(%client, prompt_len = request.prompt.len(), "ai generate");
    let outcome = state
        .ai
        .generate(&request.prompt, request.system_instruction.as_deref())
        .await;
    (StatusCode::OK, GenerateResponse { text: reply_for(outcome) })
}

#[cfg(test)]
#[path = "ai_test.rs"]
mod tests;
