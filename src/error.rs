//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; these cover the network, decoding and command layers around it.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex client.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body was not the JSON we expected
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command that needs an argument was given none
    #[error("Usage: {command} <name>")]
    MissingArgument { command: &'static str },

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PokedexError {
    /// Returns true for a 404 from the API, i.e. an unknown area or Pokemon
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PokedexError::Status { status, .. } if *status == reqwest::StatusCode::NOT_FOUND
        )
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
