//! Location area DTOs
//!
//! Covers the paginated `location-area` listing and a single area's
//! encounter table.

use serde::Deserialize;

use super::NamedResource;

/// One page of `GET /location-area/`
///
/// `next` and `previous` are absolute URLs, `None` on the last and first
/// pages respectively.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    #[serde(default)]
    pub count: u32,
    /// URL of the following page
    pub next: Option<String>,
    /// URL of the preceding page
    pub previous: Option<String>,
    /// Areas on this page
    pub results: Vec<NamedResource>,
}

/// `GET /location-area/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    /// Area name
    pub name: String,
    /// Parent location
    pub location: NamedResource,
    /// Pokemon that can be encountered in this area
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationArea {
    /// Names of every Pokemon encountered here, in API order
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}
