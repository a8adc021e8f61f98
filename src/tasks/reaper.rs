//! Cache Reaper Task
//!
//! Background task that periodically evicts expired cache entries.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Shortest pause between passes, so a zero ttl cannot spin on the lock.
pub const MIN_REAP_PERIOD: Duration = Duration::from_millis(10);

/// Time between passes for entries that live for `ttl`.
pub fn reap_period(ttl: Duration) -> Duration {
    ttl.max(MIN_REAP_PERIOD)
}

/// Spawns the reaper for one cache.
///
/// Each pass takes the store lock, drops every entry whose age is at least
/// `ttl`, releases the lock and then sleeps for `ttl` (at least
/// [`MIN_REAP_PERIOD`]). The first pass runs immediately. The loop ends as
/// soon as `cancel` fires, whether it is sleeping or about to start a pass.
///
/// # Arguments
/// * `store` - Shared store, locked only for the duration of a pass
/// * `ttl` - Entry lifetime and period between passes
/// * `cancel` - Token that stops the task
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new()));
/// let cancel = CancellationToken::new();
/// let handle = spawn_reaper_task(store.clone(), Duration::from_secs(5), cancel.clone());
/// // Later:
/// cancel.cancel();
/// handle.await?;
/// ```
pub fn spawn_reaper_task(
    store: Arc<Mutex<CacheStore>>,
    ttl: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    let period = reap_period(ttl);
    tokio::spawn(async move {
        debug!(ttl_ms = ttl.as_millis() as u64, "cache reaper started");

        loop {
            if cancel.is_cancelled() {
                break;
            }

            let removed = {
                let mut guard = store.lock().unwrap_or_else(PoisonError::into_inner);
                guard.reap_expired(ttl)
            };

            if removed > 0 {
                info!(removed, "cache reaper evicted expired entries");
            } else {
                debug!("cache reaper found no expired entries");
            }

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(period) => {}
            }
        }

        debug!("cache reaper stopped");
    })
}
