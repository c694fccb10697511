//! Command-line interface parsing for the Pokedex
//!
//! Flags here override the environment-driven [`Config`](crate::config::Config).

use clap::Parser;

use crate::config::MAX_CACHE_INTERVAL_SECS;

/// Pokedex - explore the Pokemon world from your terminal
#[derive(Parser, Debug, Default)]
#[command(name = "pokedex")]
#[command(about = "Interactive Pokedex backed by the PokeAPI")]
#[command(version)]
pub struct Cli {
    /// Seconds a cached API response is kept (0 keeps responses forever)
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(0..=MAX_CACHE_INTERVAL_SECS))]
    pub cache_interval: Option<u64>,

    /// Root URL of the PokeAPI
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}
