//! TTL Cleanup Task
//!
//! Background task that periodically removes expired cached pages.
//! Lookups already treat expired entries as absent; the sweep reclaims
//! memory for pages nobody asks for again.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::PageCache;

/// Spawns a background task that periodically removes expired entries.
///
/// The task loops forever, sleeping for `interval` between sweeps and
/// taking the write lock only for the sweep itself.
///
/// # Arguments
/// * `cache` - Shared reference to the page cache
/// * `interval` - Time between cleanup runs
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
pub fn spawn_cleanup_task(cache: Arc<RwLock<PageCache>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting TTL cleanup task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.cleanup_expired()
            };

            if removed > 0 {
                info!("TTL cleanup: removed {} expired pages", removed);
            } else {
                debug!("TTL cleanup: no expired pages found");
            }
        }
    })
}
