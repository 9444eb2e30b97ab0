//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub port: u16,
    /// Development mode flag; the renderer may alter its behavior based on it
    pub dev: bool,
    /// Soft upper bound on aggregate cached bytes (key + body per entry)
    pub cache_max_bytes: usize,
    /// Time-to-live applied to every cache entry
    pub cache_ttl: Duration,
    /// Background cleanup task interval
    pub cleanup_interval: Duration,
    /// Page paths served through the cache; all other paths bypass it
    pub cached_paths: Vec<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// Unset or unparseable values fall back to their defaults.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 5000)
    /// - `APP_ENV` - "production" disables dev mode; anything else enables it
    /// - `CACHE_MAX_BYTES` - Soft cache size limit in bytes (default: 100 MB)
    /// - `CACHE_TTL_SECS` - Entry time-to-live in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL_SECS` - Expiry sweep frequency in seconds (default: 60)
    /// - `CACHED_PATHS` - Comma-separated page paths served through the cache
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            dev: env::var("APP_ENV")
                .map(|v| v != "production")
                .unwrap_or(true),
            cache_max_bytes: env::var("CACHE_MAX_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100_000_000),
            cache_ttl: Duration::from_secs(
                env::var("CACHE_TTL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(3600),
            ),
            cleanup_interval: Duration::from_secs(
                env::var("CLEANUP_INTERVAL_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60),
            ),
            cached_paths: env::var("CACHED_PATHS")
                .map(|v| {
                    v.split(',')
                        .map(|p| p.trim().to_string())
                        .filter(|p| !p.is_empty())
                        .collect()
                })
                .unwrap_or_else(|_| Self::default_cached_paths()),
        }
    }

    fn default_cached_paths() -> Vec<String> {
        ["/", "/code", "/about", "/social"]
            .into_iter()
            .map(String::from)
            .collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5000,
            dev: true,
            cache_max_bytes: 100_000_000,
            cache_ttl: Duration::from_secs(3600),
            cleanup_interval: Duration::from_secs(60),
            cached_paths: Self::default_cached_paths(),
        }
    }
}
