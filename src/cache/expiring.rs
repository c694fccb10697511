//! Expiring Cache Module
//!
//! Thread-safe key/bytes cache whose entries silently disappear once they are
//! older than a fixed interval. A background reaper sweeps the store every
//! interval; reads never filter by age.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::debug;

use crate::cache::store::CacheStore;
use crate::tasks::spawn_reaper;

// == Cache ==
/// Cloneable handle to a shared expiring cache.
///
/// All clones see the same entries. The reaper stops when [`Cache::close`]
/// is called or once every clone has been dropped.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    shutdown: Arc<watch::Sender<bool>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// `interval` is both the sweep period and the maximum entry age, so an
    /// entry lives at least `interval` and at most about `2 * interval`.
    /// A zero interval disables reaping entirely: entries never expire. So
    /// does an interval too large for the clock to schedule a first sweep,
    /// such as `Duration::MAX`.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime with a reaping interval.
    pub fn new(interval: Duration) -> Self {
        Self::with_reaper(interval).0
    }

    /// Builds the cache and returns the reaper's handle, `None` when
    /// reaping is disabled.
    fn with_reaper(interval: Duration) -> (Self, Option<JoinHandle<()>>) {
        let store = Arc::new(Mutex::new(CacheStore::new()));
        let (shutdown, shutdown_rx) = watch::channel(false);

        let first_sweep = Instant::now()
            .checked_add(interval)
            .filter(|_| !interval.is_zero());
        let reaper = match first_sweep {
            Some(first_sweep) => Some(spawn_reaper(
                store.clone(),
                first_sweep,
                interval,
                shutdown_rx,
            )),
            None => {
                debug!("Cache created with interval {:?}, reaping disabled", interval);
                None
            }
        };

        let cache = Self {
            store,
            interval,
            shutdown: Arc::new(shutdown),
        };
        (cache, reaper)
    }

    // == Add ==
    /// Inserts or overwrites `key`, stamping the entry with the current time.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let (key, value) = (key.into(), value.into());
        self.store.lock().await.insert(key, value);
    }

    // == Get ==
    /// Returns the value stored under `key`, if any.
    ///
    /// An entry that is past its nominal age but not yet swept is still
    /// returned.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    // == Close ==
    /// Stops the reaper. Entries already stored stay readable but no longer
    /// expire. Calling this more than once is harmless.
    pub fn close(&self) {
        self.shutdown.send_replace(true);
    }

    /// Returns true once [`Cache::close`] has been called.
    pub fn is_closed(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Returns the configured sweep interval and maximum age.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the number of entries currently stored.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    /// Returns true when no entries are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
