//! Cache Reaper Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps the cache store every `interval`.
///
/// Each sweep removes entries created strictly before `now - interval`. The
/// first sweep happens at `first_sweep`. The task runs until `shutdown`
/// carries `true` or its sender is dropped; it waits on the timer between
/// sweeps and only takes the store lock for the sweep itself.
///
/// # Arguments
/// * `store` - Shared store, the same mutex the cache handle locks
/// * `first_sweep` - Instant of the first sweep, normally `now + interval`
/// * `interval` - Sweep period and maximum entry age; must be non-zero
/// * `shutdown` - Receiver side of the cache's shutdown signal
///
/// # Returns
/// A JoinHandle for the spawned task.
pub(crate) fn spawn_reaper(
    store: Arc<Mutex<CacheStore>>,
    first_sweep: Instant,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let mut ticker = interval_at(first_sweep, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::spawn(async move {
        debug!("Starting cache reaper with interval of {:?}", interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                    continue;
                }
            }

            let Some(cutoff) = Instant::now().checked_sub(interval) else {
                continue;
            };

            let (removed, remaining) = {
                let mut guard = store.lock().await;
                (guard.sweep(cutoff), guard.len())
            };

            if removed > 0 {
                info!(
                    "Cache sweep: removed {} stale entries, {} remaining",
                    removed, remaining
                );
            } else {
                debug!("Cache sweep: no stale entries found");
            }
        }

        debug!("Cache reaper stopped");
    })
}
