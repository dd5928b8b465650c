//! Simulated persistence latency.

use std::time::Duration;

/// How long store operations pretend to take.
///
/// The admin UI exercises its loading states against this delay; tests run
/// with [`Latency::None`] so nothing waits on real timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    /// Resolve immediately.
    None,
    /// Wait a fixed duration before the mutation applies.
    Fixed(Duration),
}

impl Latency {
    /// The delay the panel ships with, in milliseconds.
    pub const DEFAULT_MS: u64 = 500;

    pub(crate) async fn wait(&self) {
        match self {
            Self::None => {}
            Self::Fixed(delay) => tokio::time::sleep(*delay).await,
        }
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::Fixed(Duration::from_millis(Self::DEFAULT_MS))
    }
}
