//! Error types for the cache server
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Render Error Enum ==
/// Failure raised by the page-rendering backend.
///
/// A render failure is reported once to the caller and never retried;
/// nothing is cached for the failed request. Non-200 renders are not
/// errors and are represented by [`crate::render::RenderOutcome`]
/// instead.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The backend could not produce a page for the given path
    #[error("render failed for '{path}': {reason}")]
    Backend { path: String, reason: String },

    /// The backend panicked or was otherwise unable to respond
    #[error("renderer unavailable: {0}")]
    Unavailable(String),
}

// == Result Type Alias ==
/// Convenience Result type for render operations.
pub type Result<T> = std::result::Result<T, RenderError>;
