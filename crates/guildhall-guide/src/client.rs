//! The two advisory operations exposed to the admin panel.

use crate::backend::{GenerateRequest, GenerativeBackend};
use crate::error::{Error, Result};
use crate::prompts;
use guildhall_core::GuideSuggestion;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Advisory client the admin panel talks to.
///
/// Everything here is about shaping the two user intents into requests and
/// parsing what comes back; the backend it was composed with does the actual
/// talking.
pub struct GuideClient {
    backend: Arc<dyn GenerativeBackend>,
}

impl GuideClient {
    /// Create a client over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    /// Ask the guide for three creative quest ideas.
    ///
    /// The request carries a response schema, so the service replies with a
    /// JSON array matching [`GuideSuggestion`]. A malformed reply fails with
    /// [`Error::InvalidResponse`]; nothing partial is ever returned, so the
    /// caller's previous suggestions stay intact on failure.
    #[instrument(skip(self))]
    pub async fn suggest_quests(&self) -> Result<Vec<GuideSuggestion>> {
        let request = GenerateRequest::structured(
            prompts::SUGGEST_QUESTS_PROMPT,
            prompts::suggestion_schema(),
        );
        let text = self.backend.generate(request).await?;
        let suggestions = parse_suggestions(&text)?;
        debug!(count = suggestions.len(), "guide returned suggestions");
        Ok(suggestions)
    }

    /// Send the user's reflection and return the guide's short reply.
    ///
    /// Empty or whitespace-only input fails with [`Error::EmptyReflection`]
    /// before any remote call is made.
    #[instrument(skip(self, user_text))]
    pub async fn reflect(&self, user_text: &str) -> Result<String> {
        if user_text.trim().is_empty() {
            return Err(Error::EmptyReflection);
        }

        let request = GenerateRequest::text(prompts::reflect_prompt(user_text))
            .with_system(prompts::REFLECT_PERSONA);
        self.backend.generate(request).await
    }
}

/// Parse the service's structured reply into suggestions. The whole payload
/// must conform; one bad element fails the lot.
fn parse_suggestions(text: &str) -> Result<Vec<GuideSuggestion>> {
    serde_json::from_str(text).map_err(|e| Error::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MockGenerativeBackend;
    use guildhall_core::Stat;

    const WELL_FORMED: &str = r#"[
        {"title": "Dawn Walk", "description": "Walk before sunrise.", "statTarget": "SPIRIT"},
        {"title": "Read Aloud", "description": "Read one page aloud.", "statTarget": "MIND"},
        {"title": "Call a Friend", "description": "Catch up for ten minutes.", "statTarget": "RELATION"}
    ]"#;

    #[test]
    fn parse_preserves_order() {
        let suggestions = parse_suggestions(WELL_FORMED).unwrap();
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions[0].title, "Dawn Walk");
        assert_eq!(suggestions[0].stat_target, Stat::Spirit);
        assert_eq!(suggestions[2].stat_target, Stat::Relation);
    }

    #[test]
    fn parse_rejects_malformed_text() {
        let err = parse_suggestions("The guide suggests you rest today.").unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[test]
    fn parse_rejects_unknown_stat_tag() {
        let payload = r#"[{"title": "X", "description": "Y", "statTarget": "CHARISMA"}]"#;
        let err = parse_suggestions(payload).unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn suggest_quests_sends_structured_request() {
        let mut backend = MockGenerativeBackend::new();
        backend
            .expect_generate()
            .withf(|request| {
                request.response_schema.is_some()
                    && request.prompt.contains("three new, creative quests")
            })
            .times(1)
            .returning(|_| Ok(WELL_FORMED.to_string()));

        let client = GuideClient::new(Arc::new(backend));
        let suggestions = client.suggest_quests().await.unwrap();
        assert_eq!(suggestions.len(), 3);
    }

    #[tokio::test]
    async fn suggest_quests_surfaces_parse_failure() {
        let mut backend = MockGenerativeBackend::new();
        backend
            .expect_generate()
            .times(1)
            .returning(|_| Ok("not json".to_string()));

        let client = GuideClient::new(Arc::new(backend));
        let err = client.suggest_quests().await.unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn reflect_wraps_user_text_in_persona() {
        let mut backend = MockGenerativeBackend::new();
        backend
            .expect_generate()
            .withf(|request| {
                request.prompt.contains("\"Today I kept my budget.\"")
                    && request
                        .system_instruction
                        .as_deref()
                        .is_some_and(|s| s.contains("encouraging"))
                    && request.response_schema.is_none()
            })
            .times(1)
            .returning(|_| Ok("I believe you can keep this up.".to_string()));

        let client = GuideClient::new(Arc::new(backend));
        let reply = client.reflect("Today I kept my budget.").await.unwrap();
        assert_eq!(reply, "I believe you can keep this up.");
    }

    #[tokio::test]
    async fn reflect_guard_skips_remote_call() {
        // No expectation set: any call on the mock would panic the test.
        let backend = MockGenerativeBackend::new();
        let client = GuideClient::new(Arc::new(backend));

        for input in ["", "   ", "\n\t  "] {
            let err = client.reflect(input).await.unwrap_err();
            assert!(matches!(err, Error::EmptyReflection));
        }
    }

    #[tokio::test]
    async fn backend_failure_is_terminal() {
        let mut backend = MockGenerativeBackend::new();
        backend
            .expect_generate()
            .times(1)
            .returning(|_| Err(Error::Network("connection refused".to_string())));

        let client = GuideClient::new(Arc::new(backend));
        let err = client.reflect("a real thought").await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
