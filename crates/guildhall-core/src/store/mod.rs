//! In-Memory Admin Data Store
//!
//! Single source of truth for the quest-template and challenge collections
//! during an admin session. Every mutation waits on the configured latency
//! policy first, then applies in one step inside the write lock, so no
//! partial write is ever observable.
//!
//! Two calls racing on *different* ids both land. Two calls racing on the
//! *same* id resolve last-delay-wins; no lock or version check arbitrates
//! them. That race is part of the store's contract, not an accident, and a
//! caller that needs stronger ordering must serialize its own calls.

mod ids;
mod latency;

pub use ids::{IdSource, RecordKind, SequentialIds, WallClockIds};
pub use latency::Latency;

use crate::error::{Error, Result};
use crate::types::{Challenge, ChallengeDraft, QuestTemplate, QuestTemplateDraft};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// The two admin collections plus their in-flight bookkeeping.
pub struct AdminStore {
    quests: RwLock<Vec<QuestTemplate>>,
    challenges: RwLock<Vec<Challenge>>,
    ids: Arc<dyn IdSource>,
    latency: Latency,
    in_flight: Arc<AtomicUsize>,
}

/// Decrements the in-flight count when the operation finishes, whichever
/// way it finishes.
struct InFlightGuard(Arc<AtomicUsize>);

impl InFlightGuard {
    fn begin(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(counter))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl AdminStore {
    /// Create an empty store with wall-clock ids and the default 500 ms
    /// simulated latency.
    #[must_use]
    pub fn new() -> Self {
        Self {
            quests: RwLock::new(Vec::new()),
            challenges: RwLock::new(Vec::new()),
            ids: Arc::new(WallClockIds::new()),
            latency: Latency::default(),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Swap in a different id source.
    #[must_use]
    pub fn with_ids(mut self, ids: Arc<dyn IdSource>) -> Self {
        self.ids = ids;
        self
    }

    /// Swap in a different latency policy.
    #[must_use]
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Replace the quest collection wholesale, bypassing the latency
    /// policy. Used for seeding.
    pub async fn load_quests(&self, quests: Vec<QuestTemplate>) {
        *self.quests.write().await = quests;
    }

    /// Replace the challenge collection wholesale, bypassing the latency
    /// policy. Used for seeding.
    pub async fn load_challenges(&self, challenges: Vec<Challenge>) {
        *self.challenges.write().await = challenges;
    }

    /// Snapshot of the quest collection, newest first.
    pub async fn quests(&self) -> Vec<QuestTemplate> {
        self.quests.read().await.clone()
    }

    /// Snapshot of the challenge collection, newest first.
    pub async fn challenges(&self) -> Vec<Challenge> {
        self.challenges.read().await.clone()
    }

    /// Number of store operations currently in flight.
    ///
    /// A counter rather than a single shared boolean: with a boolean, a
    /// fast call finishing first would clear the flag while a slow call was
    /// still pending.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Whether any store operation is currently in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight() > 0
    }

    /// Assign a fresh `qt…` id, prepend the quest, return the record.
    pub async fn add_quest(&self, draft: QuestTemplateDraft) -> QuestTemplate {
        let _op = InFlightGuard::begin(&self.in_flight);
        self.latency.wait().await;

        let quest = draft.into_record(self.ids.next_id(RecordKind::Quest));
        let mut quests = self.quests.write().await;
        quests.insert(0, quest.clone());
        debug!(id = %quest.id, total = quests.len(), "quest template added");
        quest
    }

    /// Replace the quest whose id matches. An unknown id leaves the
    /// collection unchanged and reports [`Error::NotFound`]: the caller is
    /// holding a record that no longer exists.
    pub async fn update_quest(&self, quest: QuestTemplate) -> Result<QuestTemplate> {
        let _op = InFlightGuard::begin(&self.in_flight);
        self.latency.wait().await;

        let mut quests = self.quests.write().await;
        match quests.iter_mut().find(|q| q.id == quest.id) {
            Some(slot) => {
                *slot = quest.clone();
                debug!(id = %quest.id, "quest template updated");
                Ok(quest)
            }
            None => Err(Error::not_found(RecordKind::Quest, quest.id)),
        }
    }

    /// Remove the quest with the given id and return the id. Removing an
    /// absent id is a no-op, so a second delete lands in the same state as
    /// the first.
    pub async fn delete_quest(&self, id: &str) -> String {
        let _op = InFlightGuard::begin(&self.in_flight);
        self.latency.wait().await;

        let mut quests = self.quests.write().await;
        let before = quests.len();
        quests.retain(|q| q.id != id);
        if quests.len() < before {
            debug!(id, "quest template deleted");
        } else {
            debug!(id, "delete of unknown quest template ignored");
        }
        id.to_string()
    }

    /// Assign a fresh `ch…` id, prepend the challenge, return the record.
    pub async fn add_challenge(&self, draft: ChallengeDraft) -> Challenge {
        let _op = InFlightGuard::begin(&self.in_flight);
        self.latency.wait().await;

        let challenge = draft.into_record(self.ids.next_id(RecordKind::Challenge));
        let mut challenges = self.challenges.write().await;
        challenges.insert(0, challenge.clone());
        debug!(id = %challenge.id, total = challenges.len(), "challenge added");
        challenge
    }

    /// Replace the challenge whose id matches; [`Error::NotFound`] when the
    /// id matches nothing.
    pub async fn update_challenge(&self, challenge: Challenge) -> Result<Challenge> {
        let _op = InFlightGuard::begin(&self.in_flight);
        self.latency.wait().await;

        let mut challenges = self.challenges.write().await;
        match challenges.iter_mut().find(|c| c.id == challenge.id) {
            Some(slot) => {
                *slot = challenge.clone();
                debug!(id = %challenge.id, "challenge updated");
                Ok(challenge)
            }
            None => Err(Error::not_found(RecordKind::Challenge, challenge.id)),
        }
    }

    /// Remove the challenge with the given id and return the id; no-op when
    /// absent.
    pub async fn delete_challenge(&self, id: &str) -> String {
        let _op = InFlightGuard::begin(&self.in_flight);
        self.latency.wait().await;

        let mut challenges = self.challenges.write().await;
        let before = challenges.len();
        challenges.retain(|c| c.id != id);
        if challenges.len() < before {
            debug!(id, "challenge deleted");
        } else {
            debug!(id, "delete of unknown challenge ignored");
        }
        id.to_string()
    }
}

impl Default for AdminStore {
    fn default() -> Self {
        Self::new()
    }
}
