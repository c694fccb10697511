//! API Module
//!
//! Cache-first client for the PokeAPI REST service.
//!
//! # Endpoints
//! - `GET /location-area/` - Paginated list of location areas
//! - `GET /location-area/{name}` - One area and its encounters
//! - `GET /pokemon/{name}` - One Pokemon

pub mod client;

pub use client::{PokeApiClient, DEFAULT_BASE_URL};
