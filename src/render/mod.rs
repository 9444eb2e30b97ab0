//! Render Module
//!
//! Puts the external page renderer behind an object-safe trait and
//! classifies its outcomes for the cache-aware handler. The gateway
//! never caches and never retries; cache policy lives entirely in the
//! handler.

mod site;

pub use site::SiteRenderer;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;

use crate::error::{RenderError, Result};

// == Rendered Page ==
/// A completed render: a body and the status it was produced with.
///
/// Only a 200 status marks the body as cacheable; anything else is a
/// deliberate cache-bypass signal from the renderer.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub status: StatusCode,
    pub body: String,
}

impl RenderedPage {
    /// A successful, cacheable render.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: body.into(),
        }
    }

    /// A completed render carrying a non-200 status.
    pub fn with_status(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

// == Page Renderer Trait ==
/// The external rendering backend.
///
/// Implementations are free to be slow: the handler invokes them only
/// on a cache miss and outside the cache lock.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Renders the page for `path`, or fails.
    async fn render_page(&self, path: &str) -> Result<RenderedPage>;

    /// Renders the backend's own error page for a failed render.
    async fn render_error(&self, error: &RenderError, path: &str) -> String;
}

// == Render Outcome ==
/// Classification of a single render attempt.
#[derive(Debug)]
pub enum RenderOutcome {
    /// The renderer completed; the body is cacheable only when the
    /// status is 200.
    Rendered { status: StatusCode, body: String },
    /// The renderer failed; nothing may be cached and the caller owns
    /// the error response.
    Failed(RenderError),
}

// == Render Gateway ==
/// Pass-through wrapper around the renderer with outcome
/// classification.
#[derive(Clone)]
pub struct RenderGateway {
    renderer: Arc<dyn PageRenderer>,
}

impl RenderGateway {
    // == Constructor ==
    pub fn new(renderer: Arc<dyn PageRenderer>) -> Self {
        Self { renderer }
    }

    // == Render ==
    /// Invokes the renderer once and classifies the result.
    ///
    /// A failure is reported once; there are no internal retries.
    pub async fn render(&self, path: &str) -> RenderOutcome {
        match self.renderer.render_page(path).await {
            Ok(page) => RenderOutcome::Rendered {
                status: page.status,
                body: page.body,
            },
            Err(error) => RenderOutcome::Failed(error),
        }
    }

    // == Render Error ==
    /// Delegates to the backend's error-rendering path.
    pub async fn render_error(&self, error: &RenderError, path: &str) -> String {
        self.renderer.render_error(error, path).await
    }
}
