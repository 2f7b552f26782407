//! # Lectern
//!
//! Human-readable API documentation for HTTP services.
//!
//! Lectern inspects a service's declared endpoints and their validation
//! schemas and renders them as documentation. This crate provides:
//! - **Route selection** — filtering, ordering and grouping of the
//!   endpoint set, with single-route and index views
//! - **Request handling** — normalizing every validation location of
//!   every selected endpoint into renderer-ready records
//! - **A thin HTTP surface** — the docs endpoint plus a companion
//!   presentation-asset path
//!
//! The schema normalizer itself lives in [`lectern_schema`] and is
//! re-exported here.
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use lectern::{DocsConfig, DocsService, Endpoint, JsonRenderer, ServerGroup};
//!
//! let config = DocsConfig::builder()
//!     .endpoint("/docs")
//!     .build()
//!     .unwrap();
//! let service = DocsService::new(config, JsonRenderer);
//!
//! // Snapshot of the host's routing table.
//! let groups = vec![ServerGroup::new(
//!     "http://localhost:8080",
//!     vec![Endpoint::new(Method::GET, "/users").description("List users")],
//! )];
//!
//! let response = service.handle_request(&Method::GET, None, &groups);
//! assert_eq!(response.status(), 200);
//! ```
//!
//! Documentation is recomputed per request over an immutable snapshot;
//! nothing is cached and nothing blocks.

mod assets;
mod config;
mod endpoint;
mod error;
mod handler;
mod render;
mod selector;
mod service;

pub use assets::{AssetError, DocsAssets};
pub use config::{
    default_methods_order, DocsConfig, DocsConfigBuilder, RouteFilter, RouteInfo,
    DEFAULT_ENDPOINT,
};
pub use endpoint::{
    DocsView, Endpoint, EndpointRecord, EndpointSettings, GroupRecord, ResponseSet, RouteAuth,
    ServerGroup, ValidationSet,
};
pub use error::{ConfigError, DocsError, DocsResult};
pub use handler::DocsHandler;
pub use render::{DocsRenderer, JsonRenderer, RenderContext};
pub use selector::{select, DocsQuery, SelectedGroup, Selection};
pub use service::{DocsService, HttpResponse, ResponseBody};

// The normalizer is the other half of the public surface; re-export it
// so hosts depend on one crate.
pub use lectern_schema::{
    describe, normalize, ConstraintValue, DocNode, Notes, Reference, Rule, SchemaDescription,
    Shape, ValueType,
};
