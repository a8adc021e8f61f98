//! Response models for PokeAPI
//!
//! Direct serde mappings of the JSON payloads the client decodes. Only the
//! fields the explorer uses are declared; everything else is ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{Encounter, LocationArea, LocationAreaPage, NamedResource};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
