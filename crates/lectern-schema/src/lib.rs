//! # Lectern Schema
//!
//! The schema-description data model and documentation normalizer for
//! the Lectern documentation endpoint.
//!
//! This crate provides:
//! - **[`SchemaDescription`]** — the structural description of an
//!   accepted value shape, as reported by a validation library
//! - **[`DocNode`]** — the flat, renderer-friendly documentation tree
//! - **[`describe`] / [`normalize`]** — the recursive transform between
//!   the two, including denial detection, conditional branching,
//!   reference resolution and the brevity collapse
//!
//! ## Quick Start
//!
//! ```rust
//! use lectern_schema::{describe, Rule, SchemaDescription, ValueType};
//!
//! let schema = SchemaDescription::value(ValueType::String)
//!     .with_description("Account name")
//!     .with_rule(Rule::bare("alphanum"));
//!
//! let node = describe(Some(&schema)).expect("compound descriptor");
//! let entry = node.as_entry().expect("entry node");
//! assert_eq!(entry.type_name, "alphanum");
//! ```
//!
//! Normalization is pure and synchronous: inputs are read-only
//! snapshots, outputs are freshly allocated per call, and nothing is
//! cached or shared.

mod description;
mod node;
mod normalize;
mod value;

pub use description::{
    ConstraintValue, Flags, Notes, PatternRule, PeerDependency, PeerRelation, Presence,
    Reference, Rule, RuleArgument, SchemaDescription, Shape, ValueType,
};
pub use node::{
    Condition, ConditionalNode, DeniedNode, DocNode, EntryNode, EntryShape, NodeFlags, RuleDoc,
};
pub use normalize::{describe, normalize};
pub use value::{capitalize, format_existing_values, format_peer_dependency, format_reference};
