//! Backend trait for the generative service.
//!
//! The advisory client never talks HTTP itself; it hands a
//! [`GenerateRequest`] to whichever backend it was composed with. Production
//! wires in [`crate::GeminiClient`]; tests wire in the mockall mock.

use crate::error::Result;
use async_trait::async_trait;

/// A single outbound generation request.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// The user-role prompt text.
    pub prompt: String,

    /// Optional persona instruction, sent separately from the prompt.
    pub system_instruction: Option<String>,

    /// When set, the service must constrain its output to this JSON schema
    /// and reply with `application/json`.
    pub response_schema: Option<serde_json::Value>,
}

impl GenerateRequest {
    /// Plain free-text request.
    #[must_use]
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
            response_schema: None,
        }
    }

    /// Request whose output is constrained to `schema`.
    #[must_use]
    pub fn structured(prompt: impl Into<String>, schema: serde_json::Value) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
            response_schema: Some(schema),
        }
    }

    /// Attach a persona instruction.
    #[must_use]
    pub fn with_system(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }
}

/// Remote generative service the advisory client talks to.
///
/// One method is all the panel needs: send a request, get the text body of
/// the first candidate back. A single attempt is made; failures propagate.
#[cfg_attr(any(test, feature = "test-support"), mockall::automock)]
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Issue one generation call.
    async fn generate(&self, request: GenerateRequest) -> Result<String>;
}
