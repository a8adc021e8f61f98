//! Pokedex - An interactive PokeAPI explorer
//!
//! Pages through location areas, lists the creatures found in them and lets
//! the user try to catch them. API responses are kept in an in-memory cache
//! whose entries are evicted by a background reaper once they outlive the
//! configured ttl.

pub mod api;
pub mod cache;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use commands::{CommandRegistry, Control, Reply, Session};
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Repl;
