//! Guildhall Admin - Composition Root
//!
//! Wires the data store and the advisory client together behind one handle
//! for the view layer:
//! - Panel: the full view-facing contract (reads, six mutations, loading
//!   flag, two advisory calls)
//! - Seed: the starter dataset a fresh panel begins with
//!
//! The store and the guide stay separate crates with their own error types;
//! this crate only composes them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod panel;
pub mod seed;

pub use panel::AdminPanel;

// Re-export the domain surface so views depend on one crate.
pub use guildhall_core::{
    AdminStore, Cadence, Challenge, ChallengeDraft, GuideSuggestion, Latency, QuestTemplate,
    QuestTemplateDraft, SequentialIds, Stat, Verification, Visibility, WallClockIds,
};
pub use guildhall_guide::{GeminiClient, GeminiConfig, GuideClient};
