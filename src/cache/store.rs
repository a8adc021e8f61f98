//! Cache Store Module
//!
//! The unsynchronised map behind [`Cache`](crate::cache::Cache). Every method
//! here runs while the handle holds its lock, so each call is atomic with
//! respect to the others.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key to payload storage with hit/miss accounting.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Entries keyed by request URL
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Inserts or overwrites `key`. Overwriting resets the entry's age.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the payload stored under `key`.
    ///
    /// Age is not checked here: a stale entry stays readable until the next
    /// reap pass removes it.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap Expired ==
    /// Removes every entry whose age is at least `ttl`.
    ///
    /// Returns the number of entries removed.
    pub fn reap_expired(&mut self, ttl: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl));
        let removed = before - self.entries.len();

        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_store_new() {
        let store = CacheStore::new();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_add_and_get() {
        let mut store = CacheStore::new();

        store.add("url1".to_string(), b"data1".to_vec());

        assert_eq!(store.get("url1"), Some(b"data1".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = CacheStore::new();
        assert_eq!(store.get("nonexistent"), None);
    }

    #[test]
    fn test_store_overwrite_replaces_payload() {
        let mut store = CacheStore::new();

        store.add("key1".to_string(), b"value1".to_vec());
        store.add("key1".to_string(), b"value2".to_vec());

        assert_eq!(store.get("key1"), Some(b"value2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_overwrite_resets_age() {
        let mut store = CacheStore::new();
        let ttl = Duration::from_millis(150);

        store.add("key1".to_string(), b"old".to_vec());
        sleep(Duration::from_millis(100));
        store.add("key1".to_string(), b"new".to_vec());
        sleep(Duration::from_millis(100));

        // 200ms since the first add, 100ms since the overwrite
        assert_eq!(store.reap_expired(ttl), 0);
        assert_eq!(store.get("key1"), Some(b"new".to_vec()));
    }

    #[test]
    fn test_store_get_does_not_check_age() {
        let mut store = CacheStore::new();

        store.add("stale".to_string(), b"v".to_vec());
        sleep(Duration::from_millis(20));

        // Readable until a reap pass runs
        assert!(store.get("stale").is_some());
        assert_eq!(store.reap_expired(Duration::from_millis(10)), 1);
        assert!(store.get("stale").is_none());
    }

    #[test]
    fn test_store_reap_expired_keeps_fresh_entries() {
        let mut store = CacheStore::new();

        store.add("old".to_string(), b"1".to_vec());
        sleep(Duration::from_millis(60));
        store.add("fresh".to_string(), b"2".to_vec());

        let removed = store.reap_expired(Duration::from_millis(50));
        assert_eq!(removed, 1);
        assert_eq!(store.len(), 1);
        assert!(store.contains_key("fresh"));
        assert!(!store.contains_key("old"));
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new();

        store.add("key1".to_string(), b"value1".to_vec());
        store.get("key1"); // hit
        store.get("nonexistent"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_store_stats_count_reaped() {
        let mut store = CacheStore::new();

        store.add("a".to_string(), Vec::new());
        store.add("b".to_string(), Vec::new());
        store.reap_expired(Duration::ZERO);

        let stats = store.stats();
        assert_eq!(stats.reaped, 2);
        assert_eq!(stats.total_entries, 0);
    }
}
