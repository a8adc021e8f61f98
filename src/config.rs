//! Configuration Module
//!
//! Fixed session settings. The explorer takes no flags and reads no
//! settings from the environment; tests override fields through the
//! `with_*` helpers.

use std::time::Duration;

/// Public PokeAPI endpoint.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Prompt written before every line read.
pub const DEFAULT_PROMPT: &str = "Pokedex > ";

/// Client and cache configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API root, without a trailing slash
    pub base_url: String,
    /// Cache time-to-live, also the reaper period
    pub cache_ttl: Duration,
    /// Per-request HTTP timeout
    pub http_timeout: Duration,
    /// REPL prompt
    pub prompt: String,
}

impl Config {
    /// Points the client at another API root (e.g. a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: Duration::from_secs(5),
            http_timeout: Duration::from_secs(10),
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}
