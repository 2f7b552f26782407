//! The rendering seam between documentation records and presentation.
//!
//! Template engines live outside this crate. Implement [`DocsRenderer`]
//! to plug one in; the built-in [`JsonRenderer`] emits the records
//! as pretty-printed JSON and is what the service uses when nothing
//! else is configured.

use serde::Serialize;

use crate::endpoint::{EndpointRecord, GroupRecord};
use crate::error::{DocsError, DocsResult};

/// Values every rendering receives alongside the records.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    /// Base URL for presentation assets, relative to the docs endpoint.
    #[serde(rename = "cssBaseUrl")]
    pub css_base_url: String,
    /// API version advertised in the rendered output.
    #[serde(rename = "apiVersion", skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

/// Renders documentation records into a response body.
pub trait DocsRenderer {
    /// Renders the grouped index view.
    fn render_index(&self, groups: &[GroupRecord], context: &RenderContext) -> DocsResult<String>;

    /// Renders the single-route view.
    fn render_route(&self, routes: &[EndpointRecord], context: &RenderContext)
        -> DocsResult<String>;

    /// Content type of the rendered output.
    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }
}

/// Built-in renderer emitting the records as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    fn render<T: Serialize>(payload: &T) -> DocsResult<String> {
        serde_json::to_string_pretty(payload).map_err(DocsError::from)
    }
}

impl DocsRenderer for JsonRenderer {
    fn render_index(&self, groups: &[GroupRecord], _context: &RenderContext) -> DocsResult<String> {
        Self::render(&groups)
    }

    fn render_route(
        &self,
        routes: &[EndpointRecord],
        _context: &RenderContext,
    ) -> DocsResult<String> {
        Self::render(&routes)
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> RenderContext {
        RenderContext {
            css_base_url: "/docs/css".to_string(),
            api_version: None,
        }
    }

    #[test]
    fn test_json_renderer_index() {
        let groups = vec![GroupRecord {
            server: "http://localhost".to_string(),
            routes: Vec::new(),
        }];

        let body = JsonRenderer.render_index(&groups, &context()).unwrap();
        assert!(body.contains("http://localhost"));
    }

    #[test]
    fn test_json_renderer_content_type() {
        assert_eq!(JsonRenderer.content_type(), "application/json");
    }

    #[test]
    fn test_render_context_serialization() {
        let context = RenderContext {
            css_base_url: "/docs/css".to_string(),
            api_version: Some("2.0.0".to_string()),
        };
        let json = serde_json::to_value(&context).unwrap();
        assert_eq!(json["cssBaseUrl"], "/docs/css");
        assert_eq!(json["apiVersion"], "2.0.0");
    }
}
