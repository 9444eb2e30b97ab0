//! Built-in Site Renderer
//!
//! A small rendering backend serving a fixed set of pages. It stands in
//! for a real engine; deployments substitute their own
//! [`PageRenderer`] implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use axum::http::StatusCode;

use crate::error::{RenderError, Result};
use crate::render::{PageRenderer, RenderedPage};

// == Site Renderer ==
/// Renders pages from a static table of titles and content.
///
/// Unknown paths produce a complete 404 page rather than a failure, so
/// callers see the non-200 status and skip the cache. In dev mode the
/// error page includes the failure reason; in production it stays
/// generic.
pub struct SiteRenderer {
    dev: bool,
    pages: HashMap<&'static str, Page>,
}

struct Page {
    title: &'static str,
    content: &'static str,
}

impl SiteRenderer {
    // == Constructor ==
    pub fn new(dev: bool) -> Self {
        let mut pages = HashMap::new();
        pages.insert(
            "/",
            Page {
                title: "Home",
                content: "<h1>Welcome</h1><p>Server-side rendered home page.</p>",
            },
        );
        pages.insert(
            "/code",
            Page {
                title: "Code",
                content: "<h1>Code</h1><p>Projects and repositories.</p>",
            },
        );
        pages.insert(
            "/about",
            Page {
                title: "About",
                content: "<h1>About</h1><p>Who runs this site and why.</p>",
            },
        );
        pages.insert(
            "/social",
            Page {
                title: "Social",
                content: "<h1>Social</h1><p>Where else to find us.</p>",
            },
        );
        Self { dev, pages }
    }

    fn document(&self, title: &str, content: &str) -> String {
        let mode_marker = if self.dev { "\n<!-- dev build -->" } else { "" };
        format!(
            "<!doctype html>\n<html>\n<head><title>{title}</title></head>\n<body>{content}</body>\n</html>{mode_marker}"
        )
    }
}

#[async_trait]
impl PageRenderer for SiteRenderer {
    async fn render_page(&self, path: &str) -> Result<RenderedPage> {
        match self.pages.get(path) {
            Some(page) => Ok(RenderedPage::ok(self.document(page.title, page.content))),
            None => Ok(RenderedPage::with_status(
                StatusCode::NOT_FOUND,
                self.document("Not Found", "<h1>404</h1><p>No such page.</p>"),
            )),
        }
    }

    async fn render_error(&self, error: &RenderError, _path: &str) -> String {
        let detail = if self.dev {
            format!("<pre>{error}</pre>")
        } else {
            "<p>The page could not be rendered.</p>".to_string()
        };
        self.document("Error", &format!("<h1>Something went wrong</h1>{detail}"))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_known_page_renders_ok() {
        let renderer = SiteRenderer::new(false);

        let page = renderer.render_page("/about").await.unwrap();

        assert_eq!(page.status, StatusCode::OK);
        assert!(page.body.contains("<title>About</title>"));
    }

    #[tokio::test]
    async fn test_unknown_page_renders_404() {
        let renderer = SiteRenderer::new(false);

        let page = renderer.render_page("/missing").await.unwrap();

        assert_eq!(page.status, StatusCode::NOT_FOUND);
        assert!(page.body.contains("404"));
    }

    #[tokio::test]
    async fn test_render_is_deterministic() {
        let renderer = SiteRenderer::new(false);

        let first = renderer.render_page("/code").await.unwrap();
        let second = renderer.render_page("/code").await.unwrap();

        assert_eq!(first.body, second.body);
    }

    #[tokio::test]
    async fn test_dev_error_page_shows_detail() {
        let renderer = SiteRenderer::new(true);
        let error = RenderError::Unavailable("backend down".to_string());

        let body = renderer.render_error(&error, "/").await;

        assert!(body.contains("backend down"));
    }

    #[tokio::test]
    async fn test_production_error_page_hides_detail() {
        let renderer = SiteRenderer::new(false);
        let error = RenderError::Unavailable("backend down".to_string());

        let body = renderer.render_error(&error, "/").await;

        assert!(!body.contains("backend down"));
    }
}
