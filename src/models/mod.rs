//! Response models for the observability endpoints
//!
//! The page routes serve HTML straight from the renderer or the cache;
//! only the stats and health endpoints speak JSON.

pub mod responses;

// Re-export commonly used types
pub use responses::{HealthResponse, StatsResponse};
