//! Documentation endpoint configuration.
//!
//! Configuration is built once at startup through a validating builder
//! and never mutated afterwards. Invalid options fail the build; no
//! request is served after a configuration error.
//!
//! # Example
//!
//! ```rust
//! use lectern::DocsConfig;
//!
//! let config = DocsConfig::builder()
//!     .endpoint("/docs")
//!     .api_version("1.4.0")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint(), "/docs");
//! assert_eq!(config.css_base_url(), "/docs/css");
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use http::Method;
use regex::Regex;

use crate::error::ConfigError;

/// Default documentation endpoint path.
pub const DEFAULT_ENDPOINT: &str = "/docs";

/// Default method precedence used to order routes sharing a path.
#[must_use]
pub fn default_methods_order() -> Vec<Method> {
    vec![
        Method::GET,
        Method::HEAD,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::TRACE,
        Method::OPTIONS,
    ]
}

/// Route metadata handed to a caller-supplied filter predicate.
#[derive(Debug, Clone, Copy)]
pub struct RouteInfo<'a> {
    /// HTTP method of the candidate route.
    pub method: &'a Method,
    /// Path of the candidate route.
    pub path: &'a str,
    /// Identifier of the server the route belongs to.
    pub server: &'a str,
}

/// Caller-supplied endpoint filter.
pub type RouteFilter = Arc<dyn Fn(&RouteInfo<'_>) -> bool + Send + Sync>;

/// Immutable documentation configuration.
///
/// Use [`DocsConfig::builder()`] to construct instances.
#[derive(Clone)]
pub struct DocsConfig {
    /// Normalized documentation endpoint path.
    endpoint: String,
    /// Directory of presentation assets, if any.
    asset_path: Option<PathBuf>,
    /// Mount point of the companion asset route.
    css_base_url: String,
    /// Template-facing asset base, relative to the docs endpoint.
    css_relative_base: String,
    /// API version advertised in the rendered output.
    api_version: Option<String>,
    /// Method precedence used to order routes sharing a path.
    methods_order: Vec<Method>,
    /// Optional caller-supplied endpoint filter.
    route_filter: Option<RouteFilter>,
}

impl DocsConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> DocsConfigBuilder {
        DocsConfigBuilder::new()
    }

    /// Returns the normalized documentation endpoint path.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the presentation-asset directory, if configured.
    #[must_use]
    pub fn asset_path(&self) -> Option<&Path> {
        self.asset_path.as_deref()
    }

    /// Returns the mount point of the companion asset route.
    #[must_use]
    pub fn css_base_url(&self) -> &str {
        &self.css_base_url
    }

    /// Returns the template-facing asset base URL.
    ///
    /// This is the mount point reduced to its last `/css`-suffixed
    /// segment, so templates link assets relative to wherever the docs
    /// endpoint is mounted.
    #[must_use]
    pub fn css_relative_base(&self) -> &str {
        &self.css_relative_base
    }

    /// Returns the advertised API version, if configured.
    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    /// Returns the method precedence used to order routes.
    #[must_use]
    pub fn methods_order(&self) -> &[Method] {
        &self.methods_order
    }

    /// Returns the caller-supplied endpoint filter, if configured.
    #[must_use]
    pub fn route_filter(&self) -> Option<&RouteFilter> {
        self.route_filter.as_ref()
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        DocsConfigBuilder::new()
            .build()
            .expect("default configuration is valid")
    }
}

impl fmt::Debug for DocsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocsConfig")
            .field("endpoint", &self.endpoint)
            .field("asset_path", &self.asset_path)
            .field("css_base_url", &self.css_base_url)
            .field("api_version", &self.api_version)
            .field("methods_order", &self.methods_order)
            .field("route_filter", &self.route_filter.is_some())
            .finish()
    }
}

/// Builder for [`DocsConfig`].
#[derive(Clone, Default)]
pub struct DocsConfigBuilder {
    endpoint: Option<String>,
    asset_path: Option<PathBuf>,
    api_version: Option<String>,
    methods_order: Option<Vec<Method>>,
    route_filter: Option<RouteFilter>,
}

impl DocsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the documentation endpoint path.
    ///
    /// A missing leading `/` is added and a trailing `/` is trimmed.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the directory presentation assets are served from.
    #[must_use]
    pub fn asset_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.asset_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the API version advertised in the rendered output.
    #[must_use]
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Overrides the method precedence used to order routes.
    #[must_use]
    pub fn methods_order(mut self, order: Vec<Method>) -> Self {
        self.methods_order = Some(order);
        self
    }

    /// Sets a caller-supplied endpoint filter.
    ///
    /// Routes for which the predicate returns `false` are left out of
    /// the documentation.
    #[must_use]
    pub fn route_filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&RouteInfo<'_>) -> bool + Send + Sync + 'static,
    {
        self.route_filter = Some(Arc::new(filter));
        self
    }

    /// Validates the options and builds the [`DocsConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an option is invalid, e.g. an empty
    /// endpoint path.
    pub fn build(self) -> Result<DocsConfig, ConfigError> {
        let endpoint =
            normalize_endpoint(self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))?;
        let css_base_url = if endpoint == "/" {
            "/css".to_string()
        } else {
            format!("{endpoint}/css")
        };
        let css_relative_base = relative_css_base(&css_base_url);

        Ok(DocsConfig {
            endpoint,
            asset_path: self.asset_path,
            css_base_url,
            css_relative_base,
            api_version: self.api_version,
            methods_order: self.methods_order.unwrap_or_else(default_methods_order),
            route_filter: self.route_filter,
        })
    }
}

impl fmt::Debug for DocsConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocsConfigBuilder")
            .field("endpoint", &self.endpoint)
            .field("asset_path", &self.asset_path)
            .field("api_version", &self.api_version)
            .field("methods_order", &self.methods_order)
            .field("route_filter", &self.route_filter.is_some())
            .finish()
    }
}

fn normalize_endpoint(raw: &str) -> Result<String, ConfigError> {
    if raw.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "endpoint".to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    let mut endpoint = raw.to_string();
    if !endpoint.starts_with('/') {
        endpoint.insert(0, '/');
    }
    if endpoint.len() > 1 && endpoint.ends_with('/') {
        endpoint.pop();
    }
    Ok(endpoint)
}

/// Reduces the asset mount point to its last `/css`-suffixed segment.
fn relative_css_base(css_base_url: &str) -> String {
    let pattern = Regex::new(r"(/\w+)?/css$").expect("valid regex");
    pattern
        .find(css_base_url)
        .map_or_else(|| css_base_url.to_string(), |found| found.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DocsConfig::default();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.css_base_url(), "/docs/css");
        assert_eq!(config.css_relative_base(), "/docs/css");
        assert_eq!(config.methods_order(), default_methods_order());
        assert!(config.asset_path().is_none());
        assert!(config.api_version().is_none());
        assert!(config.route_filter().is_none());
    }

    #[test]
    fn test_endpoint_gains_leading_slash() {
        let config = DocsConfig::builder().endpoint("docs").build().unwrap();
        assert_eq!(config.endpoint(), "/docs");
    }

    #[test]
    fn test_endpoint_drops_trailing_slash() {
        let config = DocsConfig::builder().endpoint("/docs/").build().unwrap();
        assert_eq!(config.endpoint(), "/docs");
    }

    #[test]
    fn test_root_endpoint() {
        let config = DocsConfig::builder().endpoint("/").build().unwrap();
        assert_eq!(config.endpoint(), "/");
        assert_eq!(config.css_base_url(), "/css");
        assert_eq!(config.css_relative_base(), "/css");
    }

    #[test]
    fn test_empty_endpoint_is_rejected() {
        assert!(DocsConfig::builder().endpoint("  ").build().is_err());
    }

    #[test]
    fn test_nested_endpoint_relative_base() {
        let config = DocsConfig::builder()
            .endpoint("/api/v1/docs")
            .build()
            .unwrap();
        assert_eq!(config.css_base_url(), "/api/v1/docs/css");
        assert_eq!(config.css_relative_base(), "/docs/css");
    }

    #[test]
    fn test_route_filter_is_stored() {
        let config = DocsConfig::builder()
            .route_filter(|info| info.path != "/hidden")
            .build()
            .unwrap();

        let filter = config.route_filter().unwrap();
        let method = Method::GET;
        assert!(!filter(&RouteInfo {
            method: &method,
            path: "/hidden",
            server: "http://localhost"
        }));
        assert!(filter(&RouteInfo {
            method: &method,
            path: "/visible",
            server: "http://localhost"
        }));
    }

    #[test]
    fn test_methods_order_override() {
        let config = DocsConfig::builder()
            .methods_order(vec![Method::POST, Method::GET])
            .build()
            .unwrap();
        assert_eq!(config.methods_order(), [Method::POST, Method::GET]);
    }
}
