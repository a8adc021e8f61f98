//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::MockServer;

use pokedex::{Config, PokeApiClient};

/// Config pointed at the mock server.
pub fn config_for(server: &MockServer) -> Config {
    Config::default().with_base_url(server.uri())
}

pub fn client_for(server: &MockServer) -> PokeApiClient {
    PokeApiClient::new(&config_for(server)).expect("client should build")
}

/// A location-area page with the given area names and cursors.
pub fn page(names: &[&str], next: Option<String>, previous: Option<String>) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|name| json!({ "name": name, "url": format!("https://example.test/{name}") }))
        .collect();
    json!({
        "count": 60,
        "next": next,
        "previous": previous,
        "results": results,
    })
}

pub fn area(name: &str, pokemon: &[&str]) -> Value {
    let encounters: Vec<Value> = pokemon
        .iter()
        .map(|p| json!({ "pokemon": { "name": p, "url": "" }, "version_details": [] }))
        .collect();
    json!({ "id": 1, "name": name, "pokemon_encounters": encounters })
}

pub fn pokemon(name: &str, base_experience: u32) -> Value {
    json!({
        "id": 25,
        "name": name,
        "base_experience": base_experience,
        "height": 4,
        "weight": 60,
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "" } }
        ],
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "" } }
        ]
    })
}
