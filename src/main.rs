//! Pokedex - An interactive PokeAPI client
//!
//! Reads commands from stdin and prints results to stdout; logs go to stderr.

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::cli::Cli;
use pokedex::repl::{self, Session};
use pokedex::{Cache, Config, PokeApiClient};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables, then CLI flags
/// 3. Create the response cache and start its reaper
/// 4. Run the REPL on stdin until `exit` or end of input
/// 5. Stop the reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Defaults to "warn" so logs stay out of the REPL, override with RUST_LOG
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().with_cli(&cli);
    info!(
        "Configuration loaded: cache_interval={}s, base_url={}",
        config.cache_interval, config.base_url
    );

    let cache = Cache::new(config.cache_interval());
    let client = PokeApiClient::new(cache.clone(), config.base_url.clone());
    let mut session = Session::new(client.location_areas_url());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let result = repl::run(stdin, &mut stdout, &config.prompt, &mut session, &client)
        .await
        .context("terminal I/O failed");

    cache.close();
    info!("Pokedex closed");
    result
}
