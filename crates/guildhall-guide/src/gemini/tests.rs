//! Tests for the Gemini backend

use super::config::{GeminiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use super::security::{mask_api_key, sanitize_api_error};
use super::types::GeminiResponse;
use super::GeminiClient;
use crate::backend::GenerateRequest;
use crate::prompts;
use std::time::Duration;

#[test]
fn config_builder() {
    let config = GeminiConfig::new("test-key")
        .with_model("gemini-2.5-flash-lite")
        .with_base_url("http://localhost:8080/v1beta")
        .with_timeout(Duration::from_secs(30));

    assert_eq!(config.api_key, "test-key");
    assert_eq!(config.model, "gemini-2.5-flash-lite");
    assert_eq!(config.base_url, "http://localhost:8080/v1beta");
    assert_eq!(config.timeout, Duration::from_secs(30));
}

#[test]
fn config_defaults() {
    let config = GeminiConfig::new("k-1234567890");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.model, DEFAULT_MODEL);
}

#[test]
fn config_debug_masks_key() {
    let config = GeminiConfig::new("AIza1234567890abcdefghij");
    let debug_str = format!("{:?}", config);

    assert!(!debug_str.contains("1234567890"));
    assert!(debug_str.contains("AIza...ghij"));
}

#[test]
fn api_key_masking() {
    assert_eq!(mask_api_key("AIza1234567890abcdefghij"), "AIza...ghij");
    assert_eq!(mask_api_key("short"), "****");
    assert_eq!(mask_api_key(""), "****");
}

#[test]
fn sanitize_hides_auth_detail() {
    let sanitized = sanitize_api_error("PERMISSION_DENIED: API key not valid");
    assert!(!sanitized.contains("not valid"));
    assert!(sanitized.contains("authentication"));
}

#[test]
fn sanitize_hides_quota_detail() {
    let sanitized = sanitize_api_error("RESOURCE_EXHAUSTED: quota exceeded for project 12345");
    assert!(!sanitized.contains("12345"));
    assert!(sanitized.contains("rate limit"));
}

#[test]
fn sanitize_passes_plain_errors_through() {
    let sanitized = sanitize_api_error("INVALID_ARGUMENT: unknown field");
    assert_eq!(sanitized, "INVALID_ARGUMENT: unknown field");
}

#[test]
fn build_request_plain_text() {
    let request = GenerateRequest::text("hello");
    let wire = GeminiClient::build_request(&request);

    assert_eq!(wire.contents.len(), 1);
    assert_eq!(wire.contents[0].role.as_deref(), Some("user"));
    assert_eq!(wire.contents[0].parts[0].text, "hello");
    assert!(wire.system_instruction.is_none());
    assert!(wire.generation_config.is_none());
}

#[test]
fn build_request_structured_pins_json_output() {
    let request = GenerateRequest::structured(
        prompts::SUGGEST_QUESTS_PROMPT,
        prompts::suggestion_schema(),
    );
    let wire = GeminiClient::build_request(&request);

    let config = wire.generation_config.unwrap();
    assert_eq!(config.response_mime_type.as_deref(), Some("application/json"));
    assert_eq!(config.response_schema.unwrap()["type"], "ARRAY");
}

#[test]
fn build_request_separates_persona() {
    let request = GenerateRequest::text("prompt body").with_system(prompts::REFLECT_PERSONA);
    let wire = GeminiClient::build_request(&request);

    let system = wire.system_instruction.unwrap();
    assert!(system.role.is_none());
    assert_eq!(system.parts[0].text, prompts::REFLECT_PERSONA);
}

#[test]
fn request_serializes_with_camel_case_keys() {
    let request = GenerateRequest::structured("ideas", serde_json::json!({"type": "ARRAY"}))
        .with_system("persona");
    let wire = GeminiClient::build_request(&request);

    let value = serde_json::to_value(&wire).unwrap();
    assert!(value.get("systemInstruction").is_some());
    assert_eq!(
        value["generationConfig"]["responseMimeType"],
        "application/json"
    );
    assert!(value["generationConfig"]["responseSchema"].is_object());
}

#[test]
fn response_parses_candidate_text() {
    let body = r#"{
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "Hello there."}]},
            "finishReason": "STOP"
        }]
    }"#;

    let response: GeminiResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.candidates.len(), 1);
    assert_eq!(response.candidates[0].content.parts[0].text, "Hello there.");
    assert_eq!(response.candidates[0].finish_reason.as_deref(), Some("STOP"));
}

#[test]
fn response_tolerates_missing_candidates() {
    let response: GeminiResponse = serde_json::from_str("{}").unwrap();
    assert!(response.candidates.is_empty());
}
