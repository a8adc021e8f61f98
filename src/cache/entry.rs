//! Cache Entry Module
//!
//! Defines a single cached response payload and its creation time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached response body with the moment it was stored.
///
/// Entries are owned by the store; readers only ever get a copy of `value`.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Raw response bytes
    pub value: Vec<u8>,
    /// When the entry was added (or last overwritten)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was created.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry whose age equals the ttl is expired.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }
}
