//! Endpoint descriptors consumed from the host and the documentation
//! records produced for the renderer.
//!
//! The host hands over a read-only snapshot of its routing table as a
//! sequence of [`ServerGroup`]s. The handler turns selected endpoints
//! into [`EndpointRecord`]s, with every validation location normalized
//! into a [`DocNode`] tree.

use http::Method;
use indexmap::IndexMap;
use lectern_schema::{DocNode, Notes, SchemaDescription};
use serde::Serialize;
use serde_json::Value;

/// Auth requirements resolved for a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteAuth {
    /// Auth mode (e.g. `required`, `optional`, `try`).
    pub mode: String,
    /// Strategy names consulted for the route.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strategies: Vec<String>,
}

/// Schemas attached to a route's inputs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationSet {
    /// Path-parameter schema.
    pub params: Option<SchemaDescription>,
    /// Query-parameter schema.
    pub query: Option<SchemaDescription>,
    /// Payload schema.
    pub payload: Option<SchemaDescription>,
}

/// Schemas attached to a route's responses.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseSet {
    /// Default response schema.
    pub schema: Option<SchemaDescription>,
    /// Per-status-code response schemas.
    pub status: IndexMap<u16, SchemaDescription>,
}

/// Per-route settings surfaced in the documentation.
#[derive(Debug, Clone, Default)]
pub struct EndpointSettings {
    /// Human-readable route description.
    pub description: Option<String>,
    /// Free-form usage notes.
    pub notes: Option<Notes>,
    /// Classification tags.
    pub tags: Vec<String>,
    /// Internal routes never appear in documentation.
    pub is_internal: bool,
    /// True when the route opted out of documentation explicitly.
    pub docs_opt_out: bool,
    /// Auth requirements resolved by the host.
    pub auth: Option<RouteAuth>,
    /// Virtual host the route is bound to.
    pub vhost: Option<String>,
    /// CORS configuration, passed through opaquely.
    pub cors: Option<Value>,
    /// JSONP callback parameter name.
    pub jsonp: Option<String>,
    /// Input validation schemas.
    pub validate: ValidationSet,
    /// Response schemas.
    pub response: ResponseSet,
}

/// One registered endpoint.
#[derive(Debug, Clone, Default)]
pub struct Endpoint {
    /// HTTP method the endpoint answers.
    pub method: Method,
    /// Path the endpoint is mounted at.
    pub path: String,
    /// Settings surfaced in the documentation.
    pub settings: EndpointSettings,
}

impl Endpoint {
    /// Creates an endpoint with default settings.
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            settings: EndpointSettings::default(),
        }
    }

    /// Sets the route description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.settings.description = Some(description.into());
        self
    }

    /// Marks the route as internal.
    #[must_use]
    pub fn internal(mut self) -> Self {
        self.settings.is_internal = true;
        self
    }

    /// Opts the route out of documentation.
    #[must_use]
    pub fn docs_opt_out(mut self) -> Self {
        self.settings.docs_opt_out = true;
        self
    }

    /// Sets the query-parameter schema.
    #[must_use]
    pub fn query_schema(mut self, schema: SchemaDescription) -> Self {
        self.settings.validate.query = Some(schema);
        self
    }

    /// Sets the payload schema.
    #[must_use]
    pub fn payload_schema(mut self, schema: SchemaDescription) -> Self {
        self.settings.validate.payload = Some(schema);
        self
    }
}

/// Endpoints grouped under one server.
#[derive(Debug, Clone, Default)]
pub struct ServerGroup {
    /// Server identifier, typically its URI.
    pub server: String,
    /// Endpoints registered on the server.
    pub endpoints: Vec<Endpoint>,
}

impl ServerGroup {
    /// Creates a group for the given server identifier.
    #[must_use]
    pub fn new(server: impl Into<String>, endpoints: Vec<Endpoint>) -> Self {
        Self {
            server: server.into(),
            endpoints,
        }
    }
}

/// A documented endpoint, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct EndpointRecord {
    /// Path the endpoint is mounted at.
    pub path: String,
    /// Uppercased HTTP method.
    pub method: String,
    /// Human-readable route description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Usage notes, normalized to a sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    /// Classification tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Auth requirements resolved by the host.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<RouteAuth>,
    /// Virtual host the route is bound to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vhost: Option<String>,
    /// CORS configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<Value>,
    /// JSONP callback parameter name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jsonp: Option<String>,
    /// Normalized path-parameter schema.
    #[serde(rename = "pathParams", skip_serializing_if = "Option::is_none")]
    pub path_params: Option<DocNode>,
    /// Normalized query-parameter schema.
    #[serde(rename = "queryParams", skip_serializing_if = "Option::is_none")]
    pub query_params: Option<DocNode>,
    /// Normalized payload schema.
    #[serde(rename = "payloadParams", skip_serializing_if = "Option::is_none")]
    pub payload_params: Option<DocNode>,
    /// Normalized default response schema.
    #[serde(rename = "responseParams", skip_serializing_if = "Option::is_none")]
    pub response_params: Option<DocNode>,
    /// Normalized per-status-code response schemas.
    #[serde(rename = "statusSchema", skip_serializing_if = "IndexMap::is_empty")]
    pub status_schema: IndexMap<u16, Option<DocNode>>,
}

/// All documented endpoints of one server.
#[derive(Debug, Clone, Serialize)]
pub struct GroupRecord {
    /// Server identifier.
    pub server: String,
    /// Documented endpoints in display order.
    pub routes: Vec<EndpointRecord>,
}

/// The response shape selected for a documentation request.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DocsView {
    /// Single-route view: every documented method on one path.
    Route(Vec<EndpointRecord>),
    /// The full grouped index.
    Index(Vec<GroupRecord>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_builders() {
        let endpoint = Endpoint::new(Method::GET, "/users")
            .description("List users")
            .internal();

        assert_eq!(endpoint.method, Method::GET);
        assert_eq!(endpoint.path, "/users");
        assert_eq!(endpoint.settings.description.as_deref(), Some("List users"));
        assert!(endpoint.settings.is_internal);
        assert!(!endpoint.settings.docs_opt_out);
    }

    #[test]
    fn test_route_auth_serialization() {
        let auth = RouteAuth {
            mode: "required".to_string(),
            strategies: vec!["session".to_string()],
        };
        let json = serde_json::to_value(&auth).unwrap();
        assert_eq!(json["mode"], "required");
        assert_eq!(json["strategies"][0], "session");
    }
}
