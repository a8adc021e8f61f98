//! Creature payload
//!
//! `GET /pokemon/{name}`.

use serde::Deserialize;

use super::NamedResource;

/// A creature as returned by PokeAPI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// `null` for a handful of entries upstream
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

impl Pokemon {
    /// Base experience, treating a missing value as zero.
    pub fn base_experience(&self) -> u32 {
        self.base_experience.unwrap_or(0)
    }
}
