//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the text generator behind a trait object, the AI rate limiter, and
//! whether `X-Forwarded-For` may be used as the client key. Cheap to clone.

use std::sync::Arc;

use crate::ai::TextGenerator;
use crate::rate_limit::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    pub ai: Arc<dyn TextGenerator>,
    pub rate_limiter: RateLimiter,
    pub trust_forwarded_for: bool,
}

impl AppState {
    #[must_use]
    pub fn new(ai: Arc<dyn TextGenerator>, rate_limiter: RateLimiter) -> Self {
        Self { ai, rate_limiter, trust_forwarded_for: false }
    }

    #[must_use]
    pub fn trusting_forwarded_for(mut self, trust: bool) -> Self {
        self.trust_forwarded_for = trust;
        self
    }
}
