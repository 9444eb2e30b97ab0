//! SSR Cache - a caching front for server-side rendered pages
//!
//! Repeated requests for the same logical page are served from memory
//! with TTL expiration and byte-weighted LRU eviction instead of being
//! re-rendered.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod server;
pub mod tasks;

pub use config::Config;
pub use render::{PageRenderer, RenderGateway, RenderOutcome, RenderedPage, SiteRenderer};
pub use server::AppState;
pub use tasks::spawn_cleanup_task;
