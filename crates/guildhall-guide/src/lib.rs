//! Guildhall Guide - Advisory Client
//!
//! Talks to the remote generative-AI service ("the Guide") on behalf of the
//! admin panel:
//! - Backend: the `GenerativeBackend` trait and its Gemini implementation
//! - Client: the two advisory operations (quest suggestions, reflections)
//! - Prompts: the fixed instructions and the suggestion response schema
//! - Error: displayable error types
//!
//! One attempt is made per call. There is no retry, backoff, or rate-limit
//! bookkeeping here; every failure is terminal at the call site and the
//! caller decides whether the user retries manually.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod backend;
pub mod client;
pub mod error;
pub mod gemini;
pub mod prompts;

pub use backend::{GenerateRequest, GenerativeBackend};
pub use client::GuideClient;
pub use error::{Error, Result};
pub use gemini::{GeminiClient, GeminiConfig};

#[cfg(any(test, feature = "test-support"))]
pub use backend::MockGenerativeBackend;
