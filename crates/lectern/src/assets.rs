//! Presentation-asset serving for the documentation pages.
//!
//! Serves the css (and related) files the rendered documentation links
//! to, from a configured directory. Security measures:
//!
//! - Path traversal prevention (rejects `..` in paths)
//! - Hidden file filtering (components starting with `.`)
//! - GET and HEAD only; no directory listings

use std::path::{Component, Path, PathBuf};

use bytes::Bytes;
use http::{header, Method, Response, StatusCode};
use http_body_util::Full;
use thiserror::Error;

use crate::service::HttpResponse;

/// Errors that can occur when serving presentation assets.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The requested asset was not found.
    #[error("asset not found: {0}")]
    NotFound(String),

    /// The path is forbidden (traversal attempt or hidden file).
    #[error("forbidden asset path: {0}")]
    Forbidden(String),

    /// Method not allowed.
    #[error("method not allowed")]
    MethodNotAllowed,

    /// I/O error while reading the asset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssetError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Serves css and related presentation assets from a directory.
#[derive(Debug, Clone)]
pub struct DocsAssets {
    root: PathBuf,
}

impl DocsAssets {
    /// Creates an asset server for the given root directory.
    #[must_use]
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Returns the root directory path.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Handles a request for one asset below the mount point.
    ///
    /// # Errors
    ///
    /// Returns an error when the method is not GET or HEAD, the path is
    /// forbidden, the asset does not exist, or reading it fails.
    pub fn handle(&self, request_path: &str, method: &Method) -> Result<HttpResponse, AssetError> {
        if method != Method::GET && method != Method::HEAD {
            return Err(AssetError::MethodNotAllowed);
        }

        let path = self.resolve(request_path)?;
        if path.is_dir() {
            return Err(AssetError::NotFound(request_path.to_string()));
        }

        let contents = std::fs::read(&path).map_err(|error| {
            if error.kind() == std::io::ErrorKind::NotFound {
                AssetError::NotFound(request_path.to_string())
            } else {
                AssetError::Io(error)
            }
        })?;

        let length = contents.len();
        let body = if method == Method::HEAD {
            Bytes::new()
        } else {
            Bytes::from(contents)
        };

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime_for(&path))
            .header(header::CONTENT_LENGTH, length.to_string())
            .body(Full::new(body))
            .map_err(|error| AssetError::Io(std::io::Error::other(error.to_string())))
    }

    /// Resolves a request path below the root, rejecting traversal and
    /// hidden components.
    fn resolve(&self, request_path: &str) -> Result<PathBuf, AssetError> {
        let relative = request_path.trim_start_matches('/');

        for component in Path::new(relative).components() {
            match component {
                Component::ParentDir => {
                    return Err(AssetError::Forbidden(
                        "directory traversal not allowed".to_string(),
                    ));
                }
                Component::Normal(name) => {
                    if name.to_str().is_some_and(|name| name.starts_with('.')) {
                        return Err(AssetError::Forbidden(
                            "hidden files not allowed".to_string(),
                        ));
                    }
                }
                _ => {}
            }
        }

        Ok(self.root.join(relative))
    }
}

/// Maps an asset extension to its MIME type.
fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|extension| extension.to_str()) {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
