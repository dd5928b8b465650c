//! Gemini backend implementation
//!
//! Routes both advisory operations through the public `generateContent`
//! endpoint. One attempt per call; status codes map straight onto the error
//! taxonomy and the caller hears about failures immediately.

mod config;
mod security;
mod types;

pub use config::{GeminiConfig, DEFAULT_MODEL};

use crate::backend::{GenerateRequest, GenerativeBackend};
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use security::sanitize_api_error;
use tracing::{debug, instrument, warn};
use types::{GeminiContent, GeminiError, GeminiPart, GeminiRequest, GeminiResponse, GenerationConfig};

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(GeminiConfig::from_env()?)
    }

    /// Map a [`GenerateRequest`] onto the wire shape. Structured requests
    /// pin the response to `application/json` plus their schema.
    fn build_request(request: &GenerateRequest) -> GeminiRequest {
        let contents = vec![GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart {
                text: request.prompt.clone(),
            }],
        }];

        let system_instruction = request.system_instruction.as_ref().map(|text| GeminiContent {
            role: None,
            parts: vec![GeminiPart { text: text.clone() }],
        });

        let generation_config = request.response_schema.as_ref().map(|schema| GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(schema.clone()),
        });

        GeminiRequest {
            contents,
            system_instruction,
            generation_config,
        }
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    #[instrument(
        skip(self, request),
        fields(model = %self.config.model, structured = request.response_schema.is_some())
    )]
    async fn generate(&self, request: GenerateRequest) -> Result<String> {
        let body = Self::build_request(&request);

        // The key rides in the query string, so the URL itself must never
        // be logged.
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        );
        debug!(model = %self.config.model, "sending generate request");

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !status.is_success() {
            warn!(status = %status, "gemini api error response");
            if status.as_u16() == 429 {
                return Err(Error::RateLimit);
            }
            if let Ok(error) = serde_json::from_str::<GeminiError>(&text) {
                warn!(
                    error_status = %error.error.status,
                    error_message = %error.error.message,
                    "gemini api error detail"
                );
                return Err(Error::Api(sanitize_api_error(&format!(
                    "{}: {}",
                    error.error.status, error.error.message
                ))));
            }
            return Err(Error::Api(sanitize_api_error(&format!("HTTP {}", status))));
        }

        let parsed: GeminiResponse =
            serde_json::from_str(&text).map_err(|e| Error::InvalidResponse(e.to_string()))?;

        let candidate = parsed
            .candidates
            .first()
            .ok_or_else(|| Error::InvalidResponse("no candidates in response".to_string()))?;

        let content: String = candidate
            .content
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<Vec<_>>()
            .join("");

        if content.is_empty() {
            return Err(Error::InvalidResponse(format!(
                "empty response (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )));
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests;
