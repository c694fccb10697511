//! PokeAPI response models
//!
//! Serde DTOs decoded from the raw response bodies the cache stores. Only the
//! fields the REPL commands read are modelled; everything else in the JSON is
//! ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};

use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference, the shape PokeAPI uses for every link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. `canalave-city-area`
    pub name: String,
    /// Absolute URL of the resource
    #[serde(default)]
    pub url: String,
}
