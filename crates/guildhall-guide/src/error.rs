//! Error types for guildhall-guide

use thiserror::Error;

/// Advisory request error type
#[derive(Debug, Error)]
pub enum Error {
    /// Service credentials missing
    #[error("guide not configured: {0}")]
    NotConfigured(String),

    /// Service-side error
    #[error("api error: {0}")]
    Api(String),

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimit,

    /// Response did not match the declared shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Transport failure
    #[error("network error: {0}")]
    Network(String),

    /// Reflection called with nothing to reflect on
    #[error("reflection text is empty")]
    EmptyReflection,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
