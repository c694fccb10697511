//! Configuration Module
//!
//! Handles loading client configuration from environment variables, with
//! command-line flags layered on top.

use std::env;
use std::time::Duration;

use crate::api::DEFAULT_BASE_URL;
use crate::cache::DEFAULT_INTERVAL_SECS;
use crate::cli::Cli;

/// Largest accepted cache interval (one year)
pub const MAX_CACHE_INTERVAL_SECS: u64 = 365 * 24 * 60 * 60;

const DEFAULT_PROMPT: &str = "Pokedex > ";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Cache sweep interval and maximum entry age in seconds; 0 disables expiry
    pub cache_interval: u64,
    /// PokeAPI root URL
    pub base_url: String,
    /// REPL prompt
    pub prompt: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_CACHE_INTERVAL` - Cache interval in seconds (default: 10)
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_PROMPT` - REPL prompt (default: "Pokedex > ")
    pub fn from_env() -> Self {
        Self {
            cache_interval: env::var("POKEDEX_CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs <= MAX_CACHE_INTERVAL_SECS)
                .unwrap_or(DEFAULT_INTERVAL_SECS),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            prompt: env::var("POKEDEX_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string()),
        }
    }

    /// Overrides values with any flags given on the command line.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(secs) = cli.cache_interval {
            self.cache_interval = secs;
        }
        if let Some(url) = &cli.base_url {
            self.base_url = url.clone();
        }
        self
    }

    /// Cache interval as a Duration
    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: DEFAULT_INTERVAL_SECS,
            base_url: DEFAULT_BASE_URL.to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}
