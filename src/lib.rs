//! Pokedex - An interactive PokeAPI client
//!
//! Pages through location areas, explores them, catches Pokemon into an
//! in-memory Pokedex, and caches raw API responses in a time-expiring cache.

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use config::Config;
pub use error::{PokedexError, Result};
