//! Router Assembly
//!
//! Wires the allow-listed cached page routes, the observability
//! endpoints and the direct-render fallback, and installs the edge
//! middleware.

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{
    cached_page_handler, health_handler, passthrough_handler, stats_handler, AppState,
};

/// One year, the lifetime advertised to downstream HTTP caches.
const CACHE_CONTROL_VALUE: &str = "public, max-age=31557600";

/// Creates the main router.
///
/// Each path in `cached_paths` is served through the cache-aware
/// handler; every other path falls back to a direct render. The
/// long-lived public Cache-Control header is stamped on every response
/// before any handler-specific headers are considered.
///
/// # Middleware
/// - Cache-Control: `public, max-age=31557600` on all responses
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState, cached_paths: &[String]) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler));

    let mut seen: Vec<&str> = vec!["/stats", "/health"];
    for path in cached_paths {
        if !path.starts_with('/') || seen.contains(&path.as_str()) {
            warn!(%path, "skipping invalid or duplicate cached path");
            continue;
        }
        seen.push(path);
        router = router.route(path, get(cached_page_handler));
    }

    router
        .fallback(get(passthrough_handler))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_VALUE),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
