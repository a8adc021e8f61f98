//! API Module
//!
//! Cached HTTP client for the PokeAPI resources the explorer uses.
//!
//! # Resources
//! - `GET /location-area` - Paginated list of location areas
//! - `GET /location-area/{name}` - Encounters in one area
//! - `GET /pokemon/{name}` - Creature detail

pub mod client;

pub use client::PokeApiClient;
