//! Server Module
//!
//! HTTP edge for the page cache: the cache-aware page handler, the
//! direct-render passthrough, and the observability endpoints.
//!
//! # Routes
//! - Allow-listed page paths - served through the cache
//! - `GET /stats` - cache statistics
//! - `GET /health` - health check endpoint
//! - everything else - direct render, no caching

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
