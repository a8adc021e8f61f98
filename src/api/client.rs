//! PokeAPI Client
//!
//! Every read goes through the same path: resolve the request URL, look it
//! up in the cache, and only on a miss hit the network. The cache lock is
//! never held across the request.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// HTTP client for PokeAPI backed by a TTL response cache.
#[derive(Debug)]
pub struct PokeApiClient {
    http: Client,
    cache: Cache,
    base_url: String,
}

impl PokeApiClient {
    /// Builds a client with its own cache.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime, because the cache spawns
    /// its reaper task here.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_cancellation(config, &CancellationToken::new())
    }

    /// Builds a client whose cache reaper stops when `shutdown` fires.
    ///
    /// # Panics
    /// Must be called from within a tokio runtime.
    pub fn with_cancellation(config: &Config, shutdown: &CancellationToken) -> Result<Self> {
        let http = Client::builder().timeout(config.http_timeout).build()?;

        Ok(Self {
            http,
            cache: Cache::with_cancellation(config.cache_ttl, shutdown),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    // == List Locations ==
    /// Fetches a page of location areas.
    ///
    /// `None` requests the first page; otherwise `cursor` is a `next` or
    /// `previous` URL from an earlier page and is used verbatim.
    pub async fn list_locations(&self, cursor: Option<&str>) -> Result<LocationAreaPage> {
        let url = match cursor {
            Some(cursor) => cursor.to_string(),
            None => self.location_areas_url(),
        };
        self.fetch(url).await
    }

    // == List Encounters ==
    /// Names of the creatures that can be found in `area`.
    pub async fn list_encounters(&self, area: &str) -> Result<Vec<String>> {
        let url = format!("{}/{}", self.location_areas_url(), area);
        let area: LocationArea = self.fetch(url).await?;
        Ok(area.pokemon_names())
    }

    // == Get Creature ==
    pub async fn get_creature(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch(url).await
    }

    /// The response cache, exposed for inspection.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    fn location_areas_url(&self) -> String {
        format!("{}/location-area", self.base_url)
    }

    /// Cache-first GET that decodes the body as `T`.
    ///
    /// Only bodies that decode successfully are cached, keyed by `url`.
    async fn fetch<T: DeserializeOwned>(&self, url: String) -> Result<T> {
        if let Some(body) = self.cache.get(&url) {
            debug!(%url, "cache hit");
            return Ok(serde_json::from_slice(&body)?);
        }

        debug!(%url, "cache miss, fetching");
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status { url, status });
        }

        let body = response.bytes().await?;
        let decoded = serde_json::from_slice(&body)?;
        debug!(%url, bytes = body.len(), "caching response");
        self.cache.add(url, body.to_vec());

        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cached_payload_served_without_network() {
        // Nothing listens on port 9; any network call would fail.
        let config = Config::default().with_base_url("http://127.0.0.1:9");
        let client = PokeApiClient::new(&config).unwrap();
        client.cache().add(
            "http://127.0.0.1:9/pokemon/pikachu",
            br#"{"name": "pikachu", "base_experience": 112}"#.to_vec(),
        );

        let pokemon = client.get_creature("pikachu").await.unwrap();

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience(), 112);
        assert_eq!(client.cache().stats().hits, 1);
    }

    #[tokio::test]
    async fn test_corrupt_cached_payload_is_decode_error() {
        let config = Config::default().with_base_url("http://127.0.0.1:9");
        let client = PokeApiClient::new(&config).unwrap();
        client
            .cache()
            .add("http://127.0.0.1:9/location-area", b"not json".to_vec());

        let result = client.list_locations(None).await;

        assert!(matches!(result, Err(PokedexError::Decode(_))));
    }

    #[tokio::test]
    async fn test_encounter_url_is_cache_key() {
        let config = Config::default().with_base_url("http://127.0.0.1:9/");
        let client = PokeApiClient::new(&config).unwrap();
        client.cache().add(
            "http://127.0.0.1:9/location-area/canalave-city-area",
            br#"{"name": "canalave-city-area", "pokemon_encounters": [
                {"pokemon": {"name": "tentacool"}}
            ]}"#
            .to_vec(),
        );

        let names = client.list_encounters("canalave-city-area").await.unwrap();

        assert_eq!(names, vec!["tentacool"]);
    }

    #[test]
    #[should_panic]
    fn test_new_outside_runtime_panics() {
        let _ = PokeApiClient::new(&Config::default());
    }
}
