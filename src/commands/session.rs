//! Session State
//!
//! Everything the command handlers mutate: the API client, pagination
//! cursors, the caught collection and the random source for catch rolls.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::api::PokeApiClient;
use crate::models::{LocationAreaPage, Pokemon};

// == Caught Pokemon ==
/// A creature in the pokedex, with when it was caught.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

// == Session ==
/// State for one interactive session.
pub struct Session {
    pub client: PokeApiClient,
    /// URL of the page after the last one shown
    pub next: Option<String>,
    /// URL of the page before the last one shown
    pub previous: Option<String>,
    /// Whether any page has been shown yet
    pub paged: bool,
    /// Caught creatures keyed by the name or id they were caught by
    pub pokedex: BTreeMap<String, CaughtPokemon>,
    rng: Box<dyn RngCore + Send>,
}

impl Session {
    // == Constructors ==
    /// Creates a session with an entropy-seeded random source.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    pub fn with_rng(client: PokeApiClient, rng: impl RngCore + Send + 'static) -> Self {
        Self {
            client,
            next: None,
            previous: None,
            paged: false,
            pokedex: BTreeMap::new(),
            rng: Box::new(rng),
        }
    }

    // == Paging ==
    /// Remembers the cursors of the page just shown.
    pub fn record_page(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
        self.paged = true;
    }

    // == Catching ==
    /// Draws a number in `[0, 1)`.
    pub fn roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Adds (or replaces) a creature in the pokedex under `name`, the name
    /// or id the user caught it by. `inspect` looks it up the same way.
    pub fn record_catch(&mut self, name: &str, pokemon: Pokemon) {
        let caught = CaughtPokemon {
            pokemon,
            caught_at: Utc::now(),
        };
        self.pokedex.insert(name.to_string(), caught);
    }
}
