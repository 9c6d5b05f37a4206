//! Gemini `generateContent` client.

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use super::{AiError, TextGenerator};
use crate::config::AiConfig;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    temperature: f32,
}

impl GeminiClient {
    /// Build a client from typed config. A missing key is allowed; calls
    /// then fail with [`AiError::MissingApiKey`] without touching the network.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &AiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| AiError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.clone(),
            temperature: config.temperature,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str, system_instruction: Option<&str>) -> Result<String, AiError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(AiError::MissingApiKey);
        };
        let body = build_request(prompt, system_instruction, self.temperature);
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AiError::ApiRequest(e.to_string()))?;
        if status != 200 {
            return Err(AiError::ApiResponse { status, body: text });
        }
        parse_response(&text)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<GeminiContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: [GeminiPart<'a>; 1],
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

pub(crate) fn build_request<'a>(
    prompt: &'a str,
    system_instruction: Option<&'a str>,
    temperature: f32,
) -> GenerateContentRequest<'a> {
    GenerateContentRequest {
        contents: vec![GeminiContent { role: Some("user"), parts: [GeminiPart { text: prompt }] }],
        system_instruction: system_instruction
            .filter(|s| !s.trim().is_empty())
            .map(|text| GeminiContent { role: None, parts: [GeminiPart { text }] }),
        generation_config: GenerationConfig { temperature },
    }
}

/// Concatenated text parts of the first candidate.
pub(crate) fn parse_response(json_text: &str) -> Result<String, AiError> {
    let root: Value = serde_json::from_str(json_text).map_err(|e| AiError::ApiParse(e.to_string()))?;
    let parts = root
        .get("candidates")
        .and_then(Value::as_array)
        .and_then(|arr| arr.first())
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(Value::as_array);
    let Some(parts) = parts else {
        return Err(AiError::Empty);
    };
    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    if text.trim().is_empty() { Err(AiError::Empty) } else { Ok(text) }
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
