use serde_json::json;

use super::*;
use crate::config::{AiTimeouts, DEFAULT_AI_BASE_URL, DEFAULT_AI_MODEL};

fn config(api_key: Option<&str>) -> AiConfig {
    AiConfig {
        api_key: api_key.map(str::to_owned),
        model: DEFAULT_AI_MODEL.into(),
        base_url: DEFAULT_AI_BASE_URL.into(),
        temperature: 0.7,
        timeouts: AiTimeouts { request_secs: 5, connect_secs: 1 },
    }
}

// =============================================================================
// REQUEST
// =============================================================================

#[test]
fn request_carries_prompt_instruction_and_temperature() {
    let body = serde_json::to_value(build_request("Explain tides", Some("Be brief."), 0.7)).unwrap();
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Explain tides");
    assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Be brief.");
    assert!(body["systemInstruction"].get("role").is_none());
    let temperature = body["generationConfig"]["temperature"].as_f64().unwrap();
    assert!((temperature - 0.7).abs() < 1e-6);
}

#[test]
fn blank_instruction_is_omitted() {
    let body = serde_json::to_value(build_request("hi", Some("  "), 0.5)).unwrap();
    assert!(body.get("systemInstruction").is_none());
    let body = serde_json::to_value(build_request("hi", None, 0.5)).unwrap();
    assert!(body.get("systemInstruction").is_none());
}

#[test]
fn endpoint_names_the_model() {
    let client = GeminiClient::new(&config(Some("k"))).unwrap();
    assert_eq!(
        client.endpoint(),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
    );
    assert!(client.is_configured());
}

// =============================================================================
// RESPONSE
// =============================================================================

#[test]
fn parse_joins_text_parts_of_first_candidate() {
    let raw = json!({
        "candidates": [
            { "content": { "parts": [{ "text": "Hello, " }, { "text": "world" }] } },
            { "content": { "parts": [{ "text": "ignored" }] } }
        ]
    })
    .to_string();
    assert_eq!(parse_response(&raw).unwrap(), "Hello, world");
}

#[test]
fn parse_without_candidates_is_empty() {
    assert!(matches!(parse_response(r#"{"candidates": []}"#), Err(AiError::Empty)));
    assert!(matches!(parse_response(r#"{"promptFeedback": {}}"#), Err(AiError::Empty)));
    let blank = json!({ "candidates": [{ "content": { "parts": [{ "text": " " }] } }] }).to_string();
    assert!(matches!(parse_response(&blank), Err(AiError::Empty)));
}

#[test]
fn parse_rejects_malformed_json() {
    assert!(matches!(parse_response("not json"), Err(AiError::ApiParse(_))));
}

#[tokio::test]
async fn missing_key_fails_without_network() {
    let client = GeminiClient::new(&config(None)).unwrap();
    assert!(!client.is_configured());
    let result = client.generate("hello", None).await;
    assert!(matches!(result, Err(AiError::MissingApiKey)));
}
