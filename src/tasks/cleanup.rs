//! TTL Cleanup Task
//!
//! Background task that periodically removes expired entries from both
//! context stores. Expiry is already enforced lazily on read; this task
//! exists so dead entries do not sit in memory until someone asks for them.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::context::CacheContext;

/// Spawns a background task that sweeps expired entries from both stores.
///
/// The task loops forever, sleeping `interval_secs` between rounds and
/// taking each store's write lock only for the duration of its sweep.
///
/// # Arguments
/// * `caches` - the context whose stores are swept
/// * `interval_secs` - seconds between cleanup rounds
///
/// # Returns
/// A JoinHandle used to abort the task during shutdown.
pub fn spawn_cleanup_task(caches: CacheContext, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(interval_secs, "starting TTL cleanup task");

        loop {
            tokio::time::sleep(interval).await;

            let removed_llm = caches.llm.write().await.cleanup();
            let removed_api = caches.api.write().await.cleanup();

            if removed_llm + removed_api > 0 {
                info!(removed_llm, removed_api, "TTL cleanup removed expired entries");
            } else {
                debug!("TTL cleanup found no expired entries");
            }
        }
    })
}
