//! Request Handlers
//!
//! The cache-aware page handler and its collaborators. Per request the
//! flow is: derive key, look up, serve a hit verbatim, or render and
//! decide whether the result may be stored.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::{derive_key, PageCache};
use crate::models::{HealthResponse, StatsResponse};
use crate::render::{PageRenderer, RenderGateway, RenderOutcome, SiteRenderer};

/// Application state shared across all handlers.
///
/// The cache is the only shared mutable resource; it is constructed
/// once at startup and handed to the router. The gateway holds the
/// rendering backend behind its trait seam.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe page cache
    pub cache: Arc<RwLock<PageCache>>,
    /// Classifying wrapper around the rendering backend
    pub gateway: RenderGateway,
}

impl AppState {
    /// Creates a new AppState from a cache and a rendering backend.
    pub fn new(cache: PageCache, renderer: Arc<dyn PageRenderer>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            gateway: RenderGateway::new(renderer),
        }
    }

    /// Creates a new AppState from configuration, using the built-in
    /// site renderer as the backend.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let cache = PageCache::new(config.cache_max_bytes, config.cache_ttl);
        Self::new(cache, Arc::new(SiteRenderer::new(config.dev)))
    }
}

/// Handler for allow-listed page routes.
///
/// Serves from the cache when a live entry exists (`x-cache: HIT`),
/// otherwise renders. A 200 render is stored and marked
/// `x-cache: MISS`; a non-200 render is passed through untouched with
/// no cache marker; a failed render is answered with the backend's own
/// error page. The cache is mutated at most once per request.
pub async fn cached_page_handler(State(state): State<AppState>, uri: Uri) -> Response {
    let key = derive_key(&uri);

    // Lookup refreshes recency and prunes the entry if it expired.
    let cached = state.cache.write().await.get(&key);
    if let Some(body) = cached {
        debug!(%key, "cache hit");
        return ([("x-cache", "HIT")], Html(body)).into_response();
    }

    // Render outside the lock so slow renders never serialize lookups.
    debug!(%key, "cache miss, rendering");
    match state.gateway.render(uri.path()).await {
        RenderOutcome::Rendered { status, body } if status == StatusCode::OK => {
            state.cache.write().await.set(key, body.clone());
            ([("x-cache", "MISS")], Html(body)).into_response()
        }
        RenderOutcome::Rendered { status, body } => {
            // The renderer skipped the cache on purpose; the body goes
            // out with its original status and no x-cache marker.
            (status, Html(body)).into_response()
        }
        RenderOutcome::Failed(error) => {
            warn!(%key, %error, "render failed");
            let body = state.gateway.render_error(&error, uri.path()).await;
            (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
        }
    }
}

/// Handler for every path outside the allow-list.
///
/// Renders directly, bypassing the cache entirely: no lookup, no
/// store, no `x-cache` header.
pub async fn passthrough_handler(State(state): State<AppState>, uri: Uri) -> Response {
    match state.gateway.render(uri.path()).await {
        RenderOutcome::Rendered { status, body } => (status, Html(body)).into_response(),
        RenderOutcome::Failed(error) => {
            warn!(path = %uri.path(), %error, "render failed");
            let body = state.gateway.render_error(&error, uri.path()).await;
            (StatusCode::INTERNAL_SERVER_ERROR, Html(body)).into_response()
        }
    }
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
