//! Route selection: filtering, ordering and grouping of endpoints.
//!
//! Selection decides which endpoints a documentation request covers and
//! in what order, before any schema is normalized. Internal routes,
//! routes that opted out of documentation, and the implicit CORS
//! preflight method are never selected.

use http::Method;
use serde::Deserialize;

use crate::config::{DocsConfig, RouteInfo};
use crate::endpoint::{Endpoint, ServerGroup};

/// Optional filters of a documentation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DocsQuery {
    /// Exact path to document.
    #[serde(default)]
    pub path: Option<String>,
    /// Server identifier to restrict documentation to.
    #[serde(default)]
    pub server: Option<String>,
}

impl DocsQuery {
    /// A query without filters: the full index.
    #[must_use]
    pub fn index() -> Self {
        Self::default()
    }

    /// A precise single-route lookup.
    #[must_use]
    pub fn route(path: impl Into<String>, server: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            server: Some(server.into()),
        }
    }
}

/// A group that survived filtering, endpoints in display order.
#[derive(Debug, Clone)]
pub struct SelectedGroup {
    /// Server identifier.
    pub server: String,
    /// Surviving endpoints, sorted for display.
    pub endpoints: Vec<Endpoint>,
}

/// Outcome of route selection.
#[derive(Debug, Clone)]
pub enum Selection {
    /// Precise lookup: every surviving method on one path.
    Route(Vec<Endpoint>),
    /// Grouped index of everything that matched.
    Index(Vec<SelectedGroup>),
}

/// Filters, orders and groups the endpoint set for one request.
///
/// Returns `None` when every group comes up empty, which callers map to
/// a not-found response.
#[must_use]
pub fn select(
    groups: &[ServerGroup],
    query: &DocsQuery,
    config: &DocsConfig,
) -> Option<Selection> {
    let mut selected = Vec::new();

    for group in groups {
        if let Some(server) = &query.server {
            if &group.server != server {
                continue;
            }
        }

        let mut endpoints: Vec<Endpoint> = group
            .endpoints
            .iter()
            .filter(|endpoint| retained(endpoint, &group.server, query, config))
            .cloned()
            .collect();

        endpoints.sort_by(|a, b| {
            a.path.cmp(&b.path).then_with(|| {
                method_precedence(&a.method, config).cmp(&method_precedence(&b.method, config))
            })
        });

        selected.push(SelectedGroup {
            server: group.server.clone(),
            endpoints,
        });
    }

    if selected.iter().all(|group| group.endpoints.is_empty()) {
        return None;
    }

    if query.path.is_some() && query.server.is_some() {
        // A precise lookup renders the single-route view over the first
        // surviving group.
        let routes = selected
            .into_iter()
            .find(|group| !group.endpoints.is_empty())?
            .endpoints;
        return Some(Selection::Route(routes));
    }

    Some(Selection::Index(selected))
}

fn retained(
    endpoint: &Endpoint,
    server: &str,
    query: &DocsQuery,
    config: &DocsConfig,
) -> bool {
    if let Some(path) = &query.path {
        if &endpoint.path != path {
            return false;
        }
    }

    if endpoint.settings.is_internal || endpoint.settings.docs_opt_out {
        return false;
    }

    // The implicit CORS preflight method is never documented.
    if endpoint.method == Method::OPTIONS {
        return false;
    }

    config.route_filter().map_or(true, |filter| {
        filter(&RouteInfo {
            method: &endpoint.method,
            path: &endpoint.path,
            server,
        })
    })
}

/// Sort rank of a method; methods outside the configured order sort
/// last, keeping their original relative order under the stable sort.
fn method_precedence(method: &Method, config: &DocsConfig) -> usize {
    config
        .methods_order()
        .iter()
        .position(|candidate| candidate == method)
        .unwrap_or(usize::MAX)
}
