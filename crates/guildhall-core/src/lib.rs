//! Guildhall Core - Domain Model and Admin Data Store
//!
//! This crate provides the data-management core of the Guildhall admin panel:
//! - Types: quest template and challenge records with their closed enums
//! - Store: the two in-memory collections with simulated persistence latency
//! - Error: error types for store operations
//!
//! State lives in memory for the duration of a session. The store is an
//! explicit object owned by the composition root and passed to whichever
//! layer needs it; there is no hidden global.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;

pub use error::{Error, Result};
pub use store::{AdminStore, IdSource, Latency, RecordKind, SequentialIds, WallClockIds};
pub use types::{
    Cadence, Challenge, ChallengeDraft, GuideSuggestion, QuestTemplate, QuestTemplateDraft, Stat,
    Verification, Visibility,
};
