//! View-facing contract of the admin core.

use crate::seed;
use guildhall_core::{
    AdminStore, Challenge, ChallengeDraft, GuideSuggestion, QuestTemplate, QuestTemplateDraft,
};
use guildhall_guide::GuideClient;
use std::sync::Arc;
use tracing::info;

/// Everything the admin views need, behind one handle.
///
/// Mutations go through the store, advisory calls through the guide; the
/// panel forwards both untouched, errors included, so a view decides what
/// to show.
pub struct AdminPanel {
    store: Arc<AdminStore>,
    guide: GuideClient,
}

impl AdminPanel {
    /// Compose a panel from its two collaborators.
    #[must_use]
    pub fn new(store: Arc<AdminStore>, guide: GuideClient) -> Self {
        Self { store, guide }
    }

    /// Load the starter dataset so a first render has rows to show.
    pub async fn seed(&self) {
        let (quests, challenges) = seed::starter_data();
        info!(
            quests = quests.len(),
            challenges = challenges.len(),
            "seeding admin collections"
        );
        self.store.load_quests(quests).await;
        self.store.load_challenges(challenges).await;
    }

    /// Shared handle to the underlying store.
    #[must_use]
    pub fn store(&self) -> Arc<AdminStore> {
        Arc::clone(&self.store)
    }

    /// Snapshot of the quest collection, newest first.
    pub async fn quests(&self) -> Vec<QuestTemplate> {
        self.store.quests().await
    }

    /// Snapshot of the challenge collection, newest first.
    pub async fn challenges(&self) -> Vec<Challenge> {
        self.store.challenges().await
    }

    /// Whether any store operation is still in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// Create a quest template from a draft.
    pub async fn add_quest(&self, draft: QuestTemplateDraft) -> QuestTemplate {
        self.store.add_quest(draft).await
    }

    /// Replace the quest template with the matching id.
    pub async fn update_quest(&self, quest: QuestTemplate) -> guildhall_core::Result<QuestTemplate> {
        self.store.update_quest(quest).await
    }

    /// Delete the quest template with the given id.
    pub async fn delete_quest(&self, id: &str) -> String {
        self.store.delete_quest(id).await
    }

    /// Create a challenge from a draft.
    pub async fn add_challenge(&self, draft: ChallengeDraft) -> Challenge {
        self.store.add_challenge(draft).await
    }

    /// Replace the challenge with the matching id.
    pub async fn update_challenge(&self, challenge: Challenge) -> guildhall_core::Result<Challenge> {
        self.store.update_challenge(challenge).await
    }

    /// Delete the challenge with the given id.
    pub async fn delete_challenge(&self, id: &str) -> String {
        self.store.delete_challenge(id).await
    }

    /// Ask the guide for quest suggestions.
    pub async fn suggest_quests(&self) -> guildhall_guide::Result<Vec<GuideSuggestion>> {
        self.guide.suggest_quests().await
    }

    /// Send a reflection to the guide.
    pub async fn reflect(&self, user_text: &str) -> guildhall_guide::Result<String> {
        self.guide.reflect(user_text).await
    }
}
