//! Location area payloads
//!
//! `GET /location-area` (paginated) and `GET /location-area/{name}`.

use serde::Deserialize;

/// A `{ name, url }` reference as PokeAPI returns in list results.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of location areas.
///
/// `next` and `previous` keep presence semantics: a missing or `null`
/// field is `None` (no further page), while an empty string stays
/// `Some("")`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationAreaPage {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Detail for a single location area.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<Encounter>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}

impl LocationArea {
    /// Names of the creatures that can be encountered here, in API order.
    pub fn pokemon_names(&self) -> Vec<String> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.clone())
            .collect()
    }
}
