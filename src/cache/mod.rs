//! Cache Module
//!
//! Provides the time-expiring response cache used by the PokeAPI client.

mod entry;
mod expiring;
mod store;


// Re-export public types
pub(crate) use entry::CacheEntry;
pub use expiring::Cache;
pub(crate) use store::CacheStore;

// == Public Constants ==
/// Default sweep interval and maximum entry age
pub const DEFAULT_INTERVAL_SECS: u64 = 10;
