//! Client side of the AI content-generation collaborator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Views call [`generate`] and render whatever text comes back: the reply is
//! either model output or one of the shared failure replies from
//! `toolkit::ai`, so there is no error branch in the view.
//!
//! DESIGN
//! ======
//! Requests are not cancelled when the user resubmits. Each view holds a
//! [`RequestSequencer`]; a response is shown only if its ticket is still the
//! latest, so the last request issued wins the display rather than the last
//! response to arrive.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use toolkit::ai::FAILURE_REPLY;
#[cfg(any(test, feature = "hydrate"))]
use toolkit::ai::GenerateRequest;
#[cfg(feature = "hydrate")]
use toolkit::ai::{GenerateResponse, RATE_LIMITED_REPLY};

pub const GENERATE_PATH: &str = "/api/ai/generate";

#[cfg(any(test, feature = "hydrate"))]
fn generate_body(prompt: &str, system_instruction: Option<&str>) -> GenerateRequest {
    GenerateRequest {
        prompt: prompt.to_owned(),
        system_instruction: system_instruction.map(str::to_owned),
    }
}

/// Text reply for `prompt`. Never fails: transport problems come back as
/// the generic failure reply.
pub async fn generate(prompt: &str, system_instruction: Option<&str>) -> String {
    #[cfg(feature = "hydrate")]
    {
        let body = generate_body(prompt, system_instruction);
        let request = match gloo_net::http::Request::post(GENERATE_PATH).json(&body) {
            Ok(request) => request,
            Err(e) => {
                log::warn!("ai request encode failed: {e}");
                return FAILURE_REPLY.to_owned();
            }
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("ai request failed: {e}");
                return FAILURE_REPLY.to_owned();
            }
        };
        if resp.status() == 429 {
            return RATE_LIMITED_REPLY.to_owned();
        }
        if !resp.ok() {
            log::warn!("ai request failed: status {}", resp.status());
            return FAILURE_REPLY.to_owned();
        }
        match resp.json::<GenerateResponse>().await {
            Ok(reply) => reply.text,
            Err(e) => {
                log::warn!("ai reply decode failed: {e}");
                FAILURE_REPLY.to_owned()
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (prompt, system_instruction);
        FAILURE_REPLY.to_owned()
    }
}

/// Issues tickets for overlapping requests so only the newest is shown.
#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    latest: Arc<AtomicU64>,
}

impl RequestSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request and return its ticket.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `ticket` belongs to the most recent request.
    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    /// Drop any in-flight request, e.g. on reset.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

/// Issue `prompt` in the background and write the reply into `output` if
/// no newer request has started meanwhile. `loading` is raised for the
/// duration.
pub fn ask(
    sequencer: &RequestSequencer,
    prompt: String,
    system_instruction: Option<&'static str>,
    loading: RwSignal<bool>,
    output: RwSignal<String>,
) {
    let ticket = sequencer.begin();
    loading.set(true);
    #[cfg(feature = "hydrate")]
    {
        let sequencer = sequencer.clone();
        leptos::task::spawn_local(async move {
            let reply = generate(&prompt, system_instruction).await;
            if sequencer.is_current(ticket) {
                let _ = output.try_set(reply);
                let _ = loading.try_set(false);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ticket, prompt, system_instruction);
        output.set(FAILURE_REPLY.to_owned());
        loading.set(false);
    }
}
