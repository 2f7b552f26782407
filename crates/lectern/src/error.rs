//! Error types for the documentation endpoint.

use http::StatusCode;
use thiserror::Error;

/// Errors that can occur while answering a documentation request.
#[derive(Debug, Error)]
pub enum DocsError {
    /// No registered endpoint matched the requested filters.
    #[error("no endpoints match the requested filters")]
    NoMatchingRoutes,

    /// The renderer failed to produce a document.
    #[error("renderer failed: {reason}")]
    Render {
        /// The reason reported by the renderer.
        reason: String,
    },

    /// Failed to serialize documentation records.
    #[error("failed to serialize documentation records: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DocsError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NoMatchingRoutes => StatusCode::NOT_FOUND,
            Self::Render { .. } | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type for documentation operations.
pub type DocsResult<T> = Result<T, DocsError>;

/// Errors raised while validating documentation options at startup.
///
/// A configuration error means nothing is served: options are checked
/// before any request handling begins.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configured value is invalid.
    #[error("invalid configuration value for {field}: {reason}")]
    InvalidValue {
        /// The field with the invalid value.
        field: String,
        /// Explanation of why the value is invalid.
        reason: String,
    },
}
