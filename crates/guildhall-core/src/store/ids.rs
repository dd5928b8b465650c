//! Identifier assignment for store records.
//!
//! The store never assigns ids itself; it asks whichever [`IdSource`] it was
//! composed with. Tests inject [`SequentialIds`] so id assignment is
//! deterministic; [`WallClockIds`] keeps the time-derived shape the product
//! has always handed out.

use chrono::Utc;
use std::fmt;
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Which collection a record belongs to. Ids carry a per-kind prefix so the
/// two namespaces never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Quest template collection (`qt…` ids)
    Quest,
    /// Challenge collection (`ch…` ids)
    Challenge,
}

impl RecordKind {
    /// Namespace prefix for ids of this kind.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Quest => "qt",
            Self::Challenge => "ch",
        }
    }

    /// Human-readable name, used in error messages.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Quest => "quest template",
            Self::Challenge => "challenge",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Source of fresh record identifiers.
pub trait IdSource: Send + Sync {
    /// Produce an id not yet handed out for this kind.
    fn next_id(&self, kind: RecordKind) -> String;
}

/// Monotonic counter ids (`qt1`, `qt2`, …). Deterministic, so tests can
/// predict every id the store assigns.
pub struct SequentialIds {
    counter: AtomicU64,
}

impl SequentialIds {
    /// Start counting from 1.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Start counting after `last_used`, for collections seeded with
    /// pre-existing ids.
    #[must_use]
    pub fn starting_at(last_used: u64) -> Self {
        Self {
            counter: AtomicU64::new(last_used),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self, kind: RecordKind) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{}{}", kind.prefix(), n)
    }
}

/// Millisecond-timestamp ids (`qt1722470400000`), the shape existing data
/// already carries. The last handed-out stamp is tracked so two calls within
/// the same millisecond still get distinct, strictly increasing ids.
pub struct WallClockIds {
    last_stamp: AtomicI64,
}

impl WallClockIds {
    /// Create a wall-clock id source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_stamp: AtomicI64::new(0),
        }
    }

    fn next_stamp(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let bump = |prev: i64| Some(prev.max(now - 1) + 1);
        match self
            .last_stamp
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, bump)
        {
            Ok(prev) | Err(prev) => prev.max(now - 1) + 1,
        }
    }
}

impl Default for WallClockIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for WallClockIds {
    fn next_id(&self, kind: RecordKind) -> String {
        format!("{}{}", kind.prefix(), self.next_stamp())
    }
}
