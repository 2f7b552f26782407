//! Documentation request handling.
//!
//! The handler orchestrates one documentation request: it runs route
//! selection over the host's endpoint snapshot, then normalizes every
//! validation location of every selected endpoint into renderer-ready
//! records. The whole pass is synchronous and allocates its output
//! fresh; nothing is cached between requests.

use indexmap::IndexMap;
use lectern_schema::{describe, DocNode, Notes, SchemaDescription};

use crate::config::DocsConfig;
use crate::endpoint::{DocsView, Endpoint, EndpointRecord, GroupRecord, ServerGroup};
use crate::error::{DocsError, DocsResult};
use crate::selector::{select, DocsQuery, Selection};

/// Answers documentation requests over a snapshot of the endpoint set.
#[derive(Debug, Clone)]
pub struct DocsHandler {
    config: DocsConfig,
}

impl DocsHandler {
    /// Creates a handler with the given configuration.
    #[must_use]
    pub fn new(config: DocsConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this handler was built with.
    #[must_use]
    pub fn config(&self) -> &DocsConfig {
        &self.config
    }

    /// Selects and documents the endpoints matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`DocsError::NoMatchingRoutes`] when no endpoint matches
    /// the requested filters.
    pub fn handle(&self, groups: &[ServerGroup], query: &DocsQuery) -> DocsResult<DocsView> {
        tracing::debug!(path = ?query.path, server = ?query.server, "documentation request");

        match select(groups, query, &self.config) {
            Some(Selection::Route(endpoints)) => Ok(DocsView::Route(document_routes(&endpoints))),
            Some(Selection::Index(selected)) => Ok(DocsView::Index(
                selected
                    .into_iter()
                    .map(|group| GroupRecord {
                        routes: document_routes(&group.endpoints),
                        server: group.server,
                    })
                    .collect(),
            )),
            None => Err(DocsError::NoMatchingRoutes),
        }
    }
}

fn document_routes(endpoints: &[Endpoint]) -> Vec<EndpointRecord> {
    endpoints.iter().map(document_route).collect()
}

/// Builds the renderer-facing record for one endpoint.
fn document_route(endpoint: &Endpoint) -> EndpointRecord {
    let settings = &endpoint.settings;
    EndpointRecord {
        path: endpoint.path.clone(),
        method: endpoint.method.as_str().to_uppercase(),
        description: settings.description.clone(),
        notes: settings.notes.as_ref().map(Notes::to_list),
        tags: settings.tags.clone(),
        auth: settings.auth.clone(),
        vhost: settings.vhost.clone(),
        cors: settings.cors.clone(),
        jsonp: settings.jsonp.clone(),
        path_params: describe(settings.validate.params.as_ref()),
        query_params: describe(settings.validate.query.as_ref()),
        payload_params: describe(settings.validate.payload.as_ref()),
        response_params: describe(settings.response.schema.as_ref()),
        status_schema: describe_status_schemas(&settings.response.status),
    }
}

/// Normalizes the per-status-code response schemas.
fn describe_status_schemas(
    status: &IndexMap<u16, SchemaDescription>,
) -> IndexMap<u16, Option<DocNode>> {
    status
        .iter()
        .map(|(code, schema)| (*code, describe(Some(schema))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::Method;
    use lectern_schema::{SchemaDescription, ValueType};

    fn handler() -> DocsHandler {
        DocsHandler::new(DocsConfig::default())
    }

    #[test]
    fn test_records_carry_normalized_locations() {
        let mut endpoint = Endpoint::new(Method::POST, "/accounts")
            .description("Create an account")
            .query_schema(SchemaDescription::value(ValueType::String))
            .payload_schema(SchemaDescription::value(ValueType::Any));
        endpoint.settings.notes = Some(Notes::One("idempotent".to_string()));
        endpoint
            .settings
            .response
            .status
            .insert(201, SchemaDescription::value(ValueType::Any));

        let groups = vec![ServerGroup::new("http://localhost", vec![endpoint])];
        let view = handler().handle(&groups, &DocsQuery::index()).unwrap();

        let record = match view {
            DocsView::Index(groups) => groups[0].routes[0].clone(),
            DocsView::Route(_) => panic!("expected index view"),
        };

        assert_eq!(record.method, "POST");
        assert_eq!(record.description.as_deref(), Some("Create an account"));
        assert_eq!(record.notes, Some(vec!["idempotent".to_string()]));
        assert!(record.path_params.is_none());
        assert!(record.query_params.is_some());
        assert!(record.payload_params.is_some());
        assert!(record.response_params.is_none());
        assert!(record.status_schema.contains_key(&201));
        assert!(record.query_params.unwrap().as_entry().unwrap().root);
    }

    #[test]
    fn test_no_match_is_an_error() {
        let groups = vec![ServerGroup::new(
            "http://localhost",
            vec![Endpoint::new(Method::GET, "/test")],
        )];

        let query = DocsQuery {
            path: Some("/missing".to_string()),
            server: None,
        };
        let error = handler().handle(&groups, &query).unwrap_err();
        assert!(matches!(error, DocsError::NoMatchingRoutes));
    }

    #[test]
    fn test_route_view_for_precise_lookup() {
        let groups = vec![ServerGroup::new(
            "http://localhost",
            vec![
                Endpoint::new(Method::GET, "/test"),
                Endpoint::new(Method::POST, "/test"),
            ],
        )];

        let query = DocsQuery::route("/test", "http://localhost");
        match handler().handle(&groups, &query).unwrap() {
            DocsView::Route(routes) => {
                let listed: Vec<_> = routes.iter().map(|route| route.method.clone()).collect();
                assert_eq!(listed, vec!["GET", "POST"]);
            }
            DocsView::Index(_) => panic!("expected route view"),
        }
    }
}
