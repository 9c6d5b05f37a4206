//! AI content generation behind `POST /api/ai/generate`.
//!
//! DESIGN
//! ======
//! Handlers depend on the [`TextGenerator`] trait rather than the concrete
//! Gemini client so tests can substitute a canned generator. Every outcome,
//! including failures, is folded into a display string by [`reply_for`];
//! the browser renders whatever text it receives.

pub mod gemini;

use toolkit::ai::{EMPTY_REPLY, FAILURE_REPLY, MISSING_KEY_REPLY};

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// No `GEMINI_API_KEY` was configured.
    #[error("API key not configured")]
    MissingApiKey,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request to the provider failed in transit.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The provider response body could not be decoded.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The provider answered without any text.
    #[error("empty response")]
    Empty,
}

// =============================================================================
// TRAIT
// =============================================================================

/// Provider-neutral text generation. Enables mocking in tests.
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`, optionally steered by a system instruction.
    ///
    /// # Errors
    ///
    /// Returns an [`AiError`] when the provider cannot produce text.
    async fn generate(&self, prompt: &str, system_instruction: Option<&str>) -> Result<String, AiError>;
}

/// Display text for a generation outcome.
#[must_use]
pub fn reply_for(outcome: Result<String, AiError>) -> String {
    match outcome {
        Ok(text) if text.trim().is_empty() => EMPTY_REPLY.to_owned(),
        Ok(text) => text,
        Err(AiError::MissingApiKey) => MISSING_KEY_REPLY.to_owned(),
        Err(AiError::Empty) => EMPTY_REPLY.to_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "ai generation failed");
            FAILURE_REPLY.to_owned()
        }
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
