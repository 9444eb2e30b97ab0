//! Cache Module
//!
//! Provides the in-memory page cache: key derivation, TTL expiration
//! and byte-weighted LRU eviction.

mod entry;
mod key;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use key::derive_key;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::PageCache;
