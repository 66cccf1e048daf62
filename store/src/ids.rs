//! Record identifiers.
//!
//! Every record, stored or pattern, receives an id from an [`IdGenerator`]
//! when it is constructed. Generators are explicit values owned by whoever
//! creates records (normally a [`crate::TripleStore`]), so independent stores
//! do not share a sequence unless they are handed the same generator.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique record identifier.
///
/// # Invariants
///
/// - Only an [`IdGenerator`] can mint a `RecordId`.
/// - Ids from one generator are strictly increasing and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u64);

impl RecordId {
    /// Get the raw counter value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source.
///
/// Safe to share between threads; `next_id` is a single atomic increment.
#[derive(Debug, Default)]
pub struct IdGenerator {
    next: AtomicU64,
}

impl IdGenerator {
    /// Create a generator whose first id is 0.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(0),
        }
    }

    /// Hand out the next id and advance the counter.
    pub fn next_id(&self) -> RecordId {
        RecordId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The id the next call to [`Self::next_id`] will return.
    #[must_use]
    pub fn peek(&self) -> RecordId {
        RecordId(self.next.load(Ordering::Relaxed))
    }
}
