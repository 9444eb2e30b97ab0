//! Cache Entry Module
//!
//! Defines the structure for individual cached pages with TTL support.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached rendered page.
///
/// Entries are immutable once stored: an overwrite replaces the whole
/// entry, never patches it in place.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The rendered page body
    pub body: String,
    /// Byte cost of the entry: key length plus body length
    pub size: usize,
    /// Insertion timestamp (Unix milliseconds)
    pub inserted_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry for `key`, expiring `ttl` after now.
    ///
    /// The entry's cost is `key.len() + body.len()`, matching how the
    /// store charges entries against its byte limit.
    pub fn new(key: &str, body: String, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        Self {
            size: key.len() + body.len(),
            inserted_at: now,
            expires_at: now + ttl.as_millis() as u64,
            body,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has outlived its TTL.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to its expiration time, so a zero TTL
    /// yields entries that are never observable.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
