//! Cache Entry Module
//!
//! Defines a single cached payload stamped with its insertion time.

use tokio::time::Instant;

// == Cache Entry ==
/// One cached value plus the instant it was inserted.
///
/// Entries are never mutated after creation; re-adding a key builds a new
/// entry with a fresh timestamp.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    /// Insertion instant (monotonic clock)
    created_at: Instant,
    /// The cached payload, never interpreted by the cache
    value: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub(crate) fn new(value: Vec<u8>) -> Self {
        Self {
            created_at: Instant::now(),
            value,
        }
    }

    /// Returns the stored payload.
    pub(crate) fn value(&self) -> &[u8] {
        &self.value
    }

    /// Returns the insertion instant.
    #[cfg(test)]
    pub(crate) fn created_at(&self) -> Instant {
        self.created_at
    }

    // == Is Stale ==
    /// Checks whether the entry was created strictly before `cutoff`.
    ///
    /// An entry created exactly at the cutoff is kept.
    pub(crate) fn is_stale(&self, cutoff: Instant) -> bool {
        self.created_at < cutoff
    }
}
