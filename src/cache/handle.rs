//! Cache Handle Module
//!
//! The thread-safe TTL cache used by the API client. One mutex guards the
//! whole store; `add`, `get` and each reap pass are atomic with respect to
//! one another. The reaper is started by the constructor and stopped when
//! the handle is dropped or its parent token is cancelled.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::spawn_reaper_task;

// == Cache ==
/// Response cache keyed by request URL.
///
/// Reads do not check age. An entry becomes invisible once a reap pass has
/// seen it at or past `ttl`, so a stale read is possible for up to one reap
/// period and the worst case lifetime of an entry is `2 * ttl`.
#[derive(Debug)]
pub struct Cache {
    store: Arc<Mutex<CacheStore>>,
    ttl: Duration,
    cancel: CancellationToken,
    reaper: JoinHandle<()>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        Self::with_cancellation(ttl, &CancellationToken::new())
    }

    /// Creates a cache whose reaper also stops when `parent` is cancelled.
    pub fn with_cancellation(ttl: Duration, parent: &CancellationToken) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new()));
        let cancel = parent.child_token();
        let reaper = spawn_reaper_task(store.clone(), ttl, cancel.clone());

        Self {
            store,
            ttl,
            cancel,
            reaper,
        }
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous payload and
    /// resetting its age.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.lock().add(key.into(), value.into());
    }

    // == Get ==
    /// Returns a copy of the payload for `key`, if one is stored.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().get(key)
    }

    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Reaper Control ==
    /// Signals the reaper to stop. Stored entries are kept.
    pub fn stop_reaper(&self) {
        self.cancel.cancel();
    }

    pub fn is_reaper_running(&self) -> bool {
        !self.reaper.is_finished()
    }

    fn lock(&self) -> MutexGuard<'_, CacheStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
