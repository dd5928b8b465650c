//! Error types for guildhall-core

use crate::store::RecordKind;
use thiserror::Error;

/// Store error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Update addressed a record that is not in the collection
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Which collection was addressed
        kind: RecordKind,
        /// The identifier that matched nothing
        id: String,
    },
}

impl Error {
    /// Create a not-found error for the given collection and id.
    #[must_use]
    pub fn not_found(kind: RecordKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;
