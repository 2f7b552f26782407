//! Thin HTTP dispatch for the documentation endpoint.
//!
//! [`DocsService`] glues the pieces together: it parses the request's
//! `path`/`server` filters, invokes the handler over the host's endpoint
//! snapshot, renders the resulting view, and maps failures to their
//! status codes. Route registration stays with the host; this module
//! only builds responses.

use bytes::Bytes;
use http::{header, Method, Response, StatusCode};
use http_body_util::Full;

use crate::config::DocsConfig;
use crate::endpoint::{DocsView, ServerGroup};
use crate::error::DocsResult;
use crate::handler::DocsHandler;
use crate::render::{DocsRenderer, RenderContext};
use crate::selector::DocsQuery;

/// Type alias for the HTTP response body.
pub type ResponseBody = Full<Bytes>;

/// Type alias for the HTTP response.
pub type HttpResponse = Response<ResponseBody>;

/// Serves the documentation endpoint over a snapshot of the endpoint
/// set.
#[derive(Debug, Clone)]
pub struct DocsService<R> {
    handler: DocsHandler,
    renderer: R,
    context: RenderContext,
}

impl<R: DocsRenderer> DocsService<R> {
    /// Creates a service with the given configuration and renderer.
    #[must_use]
    pub fn new(config: DocsConfig, renderer: R) -> Self {
        let context = RenderContext {
            css_base_url: config.css_relative_base().to_string(),
            api_version: config.api_version().map(str::to_string),
        };
        Self {
            handler: DocsHandler::new(config),
            renderer,
            context,
        }
    }

    /// Returns the configuration the service was built with.
    #[must_use]
    pub fn config(&self) -> &DocsConfig {
        self.handler.config()
    }

    /// Parses the `path`/`server` filters from a raw query string.
    #[must_use]
    pub fn parse_query(query_string: Option<&str>) -> DocsQuery {
        serde_urlencoded::from_str(query_string.unwrap_or("")).unwrap_or_default()
    }

    /// Handles a documentation request end to end.
    ///
    /// Only GET is answered with documentation; other methods get a 405.
    pub fn handle_request(
        &self,
        method: &Method,
        query_string: Option<&str>,
        groups: &[ServerGroup],
    ) -> HttpResponse {
        if method != Method::GET {
            return plain_response(StatusCode::METHOD_NOT_ALLOWED, "method not allowed");
        }

        let query = Self::parse_query(query_string);
        self.respond(groups, &query)
    }

    /// Renders the view selected by `query` into an HTTP response.
    #[must_use]
    pub fn respond(&self, groups: &[ServerGroup], query: &DocsQuery) -> HttpResponse {
        match self.render(groups, query) {
            Ok(body) => body_response(
                StatusCode::OK,
                self.renderer.content_type(),
                Bytes::from(body),
            ),
            Err(error) => {
                tracing::debug!(%error, "documentation request failed");
                plain_response(error.status_code(), &error.to_string())
            }
        }
    }

    fn render(&self, groups: &[ServerGroup], query: &DocsQuery) -> DocsResult<String> {
        match self.handler.handle(groups, query)? {
            DocsView::Route(routes) => self.renderer.render_route(&routes, &self.context),
            DocsView::Index(index) => self.renderer.render_index(&index, &self.context),
        }
    }
}

fn plain_response(status: StatusCode, message: &str) -> HttpResponse {
    body_response(
        status,
        "text/plain; charset=utf-8",
        Bytes::from(message.to_string()),
    )
}

fn body_response(status: StatusCode, content_type: &str, body: Bytes) -> HttpResponse {
    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, body.len().to_string())
        .body(Full::new(body))
        .unwrap_or_else(|_| Response::new(Full::new(Bytes::new())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::Endpoint;
    use crate::render::JsonRenderer;

    fn service() -> DocsService<JsonRenderer> {
        DocsService::new(DocsConfig::default(), JsonRenderer)
    }

    fn groups() -> Vec<ServerGroup> {
        vec![ServerGroup::new(
            "http://localhost",
            vec![Endpoint::new(Method::GET, "/test")],
        )]
    }

    #[test]
    fn test_parse_query() {
        let query =
            DocsService::<JsonRenderer>::parse_query(Some("path=/test&server=http://localhost"));
        assert_eq!(query.path.as_deref(), Some("/test"));
        assert_eq!(query.server.as_deref(), Some("http://localhost"));

        assert_eq!(
            DocsService::<JsonRenderer>::parse_query(None),
            DocsQuery::index()
        );
    }

    #[test]
    fn test_index_response_is_ok() {
        let response = service().handle_request(&Method::GET, None, &groups());
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let response = service().handle_request(&Method::GET, Some("path=/missing"), &groups());
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_post_is_method_not_allowed() {
        let response = service().handle_request(&Method::POST, None, &groups());
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
