//! Page Cache Store Module
//!
//! Main cache engine combining HashMap storage with byte-weighted LRU
//! eviction and TTL expiration.

use std::collections::HashMap;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == Page Cache ==
/// Byte-bounded page cache with LRU eviction and a fixed per-entry TTL.
///
/// The store is the only shared mutable state in the server. It is
/// constructed once at startup (empty, with a configured byte limit
/// and TTL) and injected into the request handlers; there is no
/// teardown beyond process exit. No operation can fail: a write is
/// never rejected, only evicted around.
#[derive(Debug)]
pub struct PageCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Soft upper bound on the aggregate byte cost of all entries
    max_bytes: usize,
    /// Time-to-live applied to every entry at insertion
    ttl: Duration,
    /// Aggregate byte cost of the current entries
    total_bytes: usize,
}

impl PageCache {
    // == Constructor ==
    /// Creates an empty PageCache.
    ///
    /// # Arguments
    /// * `max_bytes` - Soft limit on the summed byte cost of entries
    /// * `ttl` - Lifetime applied to every entry
    pub fn new(max_bytes: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_bytes,
            ttl,
            total_bytes: 0,
        }
    }

    // == Set ==
    /// Stores a rendered page body under `key`.
    ///
    /// The entry is charged `key.len() + body.len()` bytes against the
    /// store's limit. An existing entry under the same key is replaced
    /// wholesale. If the aggregate cost then exceeds the limit, least
    /// recently used entries are evicted until the bound holds again
    /// or the entry just inserted is the sole resident. A body larger
    /// than the whole limit is therefore still accepted and lives
    /// alone until the next write or its expiry.
    pub fn set(&mut self, key: String, body: String) {
        let entry = CacheEntry::new(&key, body, self.ttl);
        self.total_bytes += entry.size;
        if let Some(previous) = self.entries.insert(key.clone(), entry) {
            self.total_bytes -= previous.size;
        }
        self.lru.touch(&key);

        // The new entry sits at the recency front, so while anything
        // else remains it is never the eviction candidate.
        while self.total_bytes > self.max_bytes && self.entries.len() > 1 {
            match self.lru.pop_oldest() {
                Some(victim) => {
                    if let Some(evicted) = self.entries.remove(&victim) {
                        self.total_bytes -= evicted.size;
                        self.stats.record_eviction();
                        debug!(key = %victim, bytes = evicted.size, "evicted least recently used entry");
                    }
                }
                None => break,
            }
        }

        self.sync_stats();
    }

    // == Get ==
    /// Retrieves the cached body for `key`.
    ///
    /// A live entry refreshes its recency and is returned as a clone of
    /// the stored body. An expired entry is removed on this access and
    /// reported as absent, whether or not the background sweep has seen
    /// it yet.
    pub fn get(&mut self, key: &str) -> Option<String> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.remove_entry(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.sync_stats();
                return None;
            }

            let body = entry.body.clone();
            self.stats.record_hit();
            self.lru.touch(key);
            Some(body)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Has ==
    /// Returns true iff a live (non-expired) entry exists for `key`.
    ///
    /// Defined directly in terms of [`Self::get`] so that `has` and
    /// `get` share one freshness decision and can never disagree about
    /// an entry that expires between calls. Like `get`, it refreshes
    /// the entry's recency and counts toward hit/miss statistics.
    pub fn has(&mut self, key: &str) -> bool {
        self.get(key).is_some()
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.remove_entry(&key);
            self.stats.record_expiration();
        }

        self.sync_stats();
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats.set_bytes(self.total_bytes);
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Total Bytes ==
    /// Returns the aggregate byte cost of the current entries.
    pub fn total_bytes(&self) -> usize {
        self.total_bytes
    }

    // == Internal ==
    /// Removes an entry and keeps byte accounting and LRU order in step.
    fn remove_entry(&mut self, key: &str) {
        if let Some(entry) = self.entries.remove(key) {
            self.total_bytes -= entry.size;
            self.lru.remove(key);
        }
    }

    fn sync_stats(&mut self) {
        self.stats.set_entries(self.entries.len());
        self.stats.set_bytes(self.total_bytes);
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    const TTL: Duration = Duration::from_secs(300);

    #[test]
    fn test_store_new() {
        let store = PageCache::new(1000, TTL);
        assert_eq!(store.len(), 0);
        assert_eq!(store.total_bytes(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_set_and_get() {
        let mut store = PageCache::new(1000, TTL);

        store.set("/about".to_string(), "<html>about</html>".to_string());
        let body = store.get("/about");

        assert_eq!(body.as_deref(), Some("<html>about</html>"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut store = PageCache::new(1000, TTL);

        assert_eq!(store.get("/missing"), None);
        assert!(!store.has("/missing"));
    }

    #[test]
    fn test_store_byte_accounting() {
        let mut store = PageCache::new(1000, TTL);

        store.set("/a".to_string(), "xxxx".to_string());
        assert_eq!(store.total_bytes(), "/a".len() + "xxxx".len());

        store.set("/bb".to_string(), "yy".to_string());
        assert_eq!(store.total_bytes(), 6 + 4);
    }

    #[test]
    fn test_store_overwrite_replaces_entry() {
        let mut store = PageCache::new(1000, TTL);

        store.set("/a".to_string(), "first version".to_string());
        store.set("/a".to_string(), "second".to_string());

        assert_eq!(store.get("/a").as_deref(), Some("second"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.total_bytes(), "/a".len() + "second".len());
    }

    #[test]
    fn test_store_evicts_when_over_capacity() {
        // Each entry costs 6 bytes; the cap fits exactly two of them.
        let mut store = PageCache::new(12, TTL);

        store.set("/a".to_string(), "xxxx".to_string());
        store.set("/b".to_string(), "xxxx".to_string());
        assert_eq!(store.len(), 2);

        // Inserting a third overflows and evicts "/a" (oldest access).
        store.set("/c".to_string(), "xxxx".to_string());

        assert_eq!(store.len(), 2);
        assert!(store.total_bytes() <= 12);
        assert!(!store.has("/a"));
        assert!(store.has("/b"));
        assert!(store.has("/c"));
    }

    #[test]
    fn test_store_eviction_follows_access_order_not_insertion_order() {
        let mut store = PageCache::new(12, TTL);

        store.set("/a".to_string(), "xxxx".to_string());
        // "/b" is inserted after "/a"...
        store.set("/b".to_string(), "xxxx".to_string());
        // ...but "/a" is accessed afterwards, so "/b" is now the LRU.
        assert!(store.get("/a").is_some());

        store.set("/c".to_string(), "xxxx".to_string());

        assert!(store.has("/a"), "accessed entry must survive");
        assert!(!store.has("/b"), "least recently used entry must go");
        assert!(store.has("/c"));
    }

    #[test]
    fn test_store_bound_holds_after_every_set() {
        let mut store = PageCache::new(40, TTL);

        for i in 0..20 {
            store.set(format!("/page{i}"), "0123456789".to_string());
            assert!(
                store.total_bytes() <= 40,
                "aggregate size exceeded the limit after set #{i}"
            );
        }
    }

    #[test]
    fn test_store_oversized_body_accepted_as_sole_resident() {
        // Policy: a write is never rejected, only evicted around. A body
        // larger than the whole limit lives alone.
        let mut store = PageCache::new(10, TTL);

        store.set("/a".to_string(), "xxxx".to_string());
        store.set("/big".to_string(), "x".repeat(50));

        assert_eq!(store.len(), 1);
        assert!(store.has("/big"));
        assert!(!store.has("/a"));

        // The next small write evicts the oversized resident.
        store.set("/tiny".to_string(), "x".to_string());
        assert!(store.has("/tiny"));
        assert!(!store.has("/big"));
        assert!(store.total_bytes() <= 10);
    }

    #[test]
    fn test_store_ttl_expiration() {
        let mut store = PageCache::new(1000, Duration::from_millis(40));

        store.set("/a".to_string(), "body".to_string());
        assert!(store.has("/a"));

        sleep(Duration::from_millis(80));

        // Expired entries are absent even though no eviction ran.
        assert_eq!(store.get("/a"), None);
        // The access that observed the expiry also removed the entry.
        assert_eq!(store.len(), 0);
        assert_eq!(store.total_bytes(), 0);
    }

    #[test]
    fn test_store_has_honors_ttl() {
        let mut store = PageCache::new(1000, Duration::from_millis(40));

        store.set("/a".to_string(), "body".to_string());
        sleep(Duration::from_millis(80));

        assert!(!store.has("/a"));
    }

    #[test]
    fn test_store_cleanup_expired() {
        let mut store = PageCache::new(1000, Duration::from_millis(40));

        store.set("/a".to_string(), "body".to_string());
        store.set("/b".to_string(), "body".to_string());

        sleep(Duration::from_millis(80));
        store.set("/c".to_string(), "body".to_string());

        let removed = store.cleanup_expired();

        assert_eq!(removed, 2);
        assert_eq!(store.len(), 1);
        assert!(store.has("/c"));
    }

    #[test]
    fn test_store_stats() {
        let mut store = PageCache::new(1000, TTL);

        store.set("/a".to_string(), "body".to_string());
        store.get("/a"); // hit
        store.get("/missing"); // miss

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.bytes, store.total_bytes());
    }

    #[test]
    fn test_store_eviction_counted() {
        let mut store = PageCache::new(12, TTL);

        store.set("/a".to_string(), "xxxx".to_string());
        store.set("/b".to_string(), "xxxx".to_string());
        store.set("/c".to_string(), "xxxx".to_string());

        assert_eq!(store.stats().evictions, 1);
    }
}
