//! Cache Store Module
//!
//! The raw key/value map behind the expiring cache. It is never handed out
//! directly; every access goes through the mutex owned by [`Cache`].
//!
//! [`Cache`]: crate::cache::Cache

use std::collections::HashMap;

use tokio::time::Instant;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Unsynchronized entry map. Callers must hold the cache lock.
#[derive(Debug, Default)]
pub(crate) struct CacheStore {
    entries: HashMap<String, CacheEntry>,
}

impl CacheStore {
    // == Constructor ==
    pub(crate) fn new() -> Self {
        Self::default()
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and its
    /// timestamp.
    pub(crate) fn insert(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`. Age is not checked.
    pub(crate) fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.entries.get(key).map(|entry| entry.value().to_vec())
    }

    // == Sweep ==
    /// Removes every entry created strictly before `cutoff`.
    ///
    /// Returns the number of entries removed.
    pub(crate) fn sweep(&mut self, cutoff: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(cutoff));
        before - self.entries.len()
    }

    // == Length ==
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
