//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Every setting has a default so the server boots with an empty
//! environment. A missing Gemini key is not an error: the AI endpoint then
//! answers every request with the "not configured" reply. Values that are
//! present but malformed are errors, so typos do not silently fall back.

use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_AI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_AI_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_AI_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_AI_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PER_CLIENT_LIMIT: usize = 10;
pub const DEFAULT_GLOBAL_LIMIT: usize = 30;
pub const DEFAULT_RATE_WINDOW_SECS: u64 = 60;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AiConfig {
    /// `None` when `GEMINI_API_KEY` is unset or blank.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub timeouts: AiTimeouts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitConfig {
    pub per_client_limit: usize,
    pub global_limit: usize,
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_client_limit: DEFAULT_PER_CLIENT_LIMIT,
            global_limit: DEFAULT_GLOBAL_LIMIT,
            window_secs: DEFAULT_RATE_WINDOW_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Key rate limits on `X-Forwarded-For` (`TRUST_PROXY=true`). Only safe
    /// behind a proxy that overwrites the header.
    pub trust_proxy: bool,
    pub ai: AiConfig,
    pub rate_limit: RateLimitConfig,
}

impl ServerConfig {
    /// Build the full server config from the process environment.
    ///
    /// Recognised variables: `PORT`, `TRUST_PROXY`, `GEMINI_API_KEY`, `AI_MODEL`,
    /// `AI_BASE_URL`, `AI_TEMPERATURE`, `AI_REQUEST_TIMEOUT_SECS`,
    /// `AI_CONNECT_TIMEOUT_SECS`, `AI_RATE_LIMIT_PER_CLIENT`,
    /// `AI_RATE_LIMIT_GLOBAL`, `AI_RATE_LIMIT_WINDOW_SECS`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: env_parse("PORT", DEFAULT_PORT)?,
            trust_proxy: env_parse("TRUST_PROXY", false)?,
            ai: AiConfig::from_env()?,
            rate_limit: RateLimitConfig::from_env()?,
        })
    }
}

impl AiConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for malformed numeric settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env_string("GEMINI_API_KEY");
        let model = env_string("AI_MODEL").unwrap_or_else(|| DEFAULT_AI_MODEL.to_owned());
        let base_url = env_string("AI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_AI_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let temperature: f32 = env_parse("AI_TEMPERATURE", DEFAULT_AI_TEMPERATURE)?;
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::Invalid { var: "AI_TEMPERATURE", value: temperature.to_string() });
        }
        let timeouts = AiTimeouts {
            request_secs: env_parse("AI_REQUEST_TIMEOUT_SECS", DEFAULT_AI_REQUEST_TIMEOUT_SECS)?,
            connect_secs: env_parse("AI_CONNECT_TIMEOUT_SECS", DEFAULT_AI_CONNECT_TIMEOUT_SECS)?,
        };
        Ok(Self { api_key, model, base_url, temperature, timeouts })
    }
}

impl RateLimitConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for malformed limits.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            per_client_limit: env_parse("AI_RATE_LIMIT_PER_CLIENT", DEFAULT_PER_CLIENT_LIMIT)?,
            global_limit: env_parse("AI_RATE_LIMIT_GLOBAL", DEFAULT_GLOBAL_LIMIT)?,
            window_secs: env_parse("AI_RATE_LIMIT_WINDOW_SECS", DEFAULT_RATE_WINDOW_SECS)?,
        })
    }
}

// =============================================================================
// HELPERS
// =============================================================================

/// Trimmed value of `key`, treating blank as unset.
fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn env_parse<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env_string(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid { var: key, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
