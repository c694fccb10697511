//! PokeAPI Client
//!
//! Wraps a reqwest client with the expiring response cache. Every fetch looks
//! the URL up in the cache first and only goes to the network on a miss; the
//! raw body of a successful response is cached under its URL.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Public PokeAPI v2 root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Client for the PokeAPI REST service
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    /// HTTP client for making requests
    http: Client,
    /// Raw response cache keyed by URL
    cache: Cache,
    /// API root without a trailing slash
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client for `base_url` backed by `cache`.
    pub fn new(cache: Cache, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            cache,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The response cache shared by every clone of this client.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    // == URLs ==
    /// First page of the location-area listing
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Fetch ==
    /// Returns the raw body for `url`, from the cache when present.
    ///
    /// # Returns
    /// * `Ok(body)` - Cached or freshly fetched body
    /// * `Err(PokedexError::Http)` - Transport failure
    /// * `Err(PokedexError::Status)` - Non-success status; nothing is cached
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "Using cache");
            return Ok(body);
        }

        debug!(url, "Cache miss, fetching");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Typed Endpoints ==
    /// Fetches one page of location areas. `url` is either
    /// [`location_areas_url`](Self::location_areas_url) or a `next`/`previous`
    /// link from an earlier page.
    pub async fn location_areas(&self, url: &str) -> Result<LocationAreaPage> {
        self.fetch_json(url).await
    }

    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        self.fetch_json(&self.pokemon_url(name)).await
    }
}
