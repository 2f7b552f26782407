//! The normalized documentation tree.
//!
//! A [`DocNode`] is the renderer-ready representation of one descriptor.
//! Nodes are built fresh for every documentation request and never
//! mutated afterwards; renderers consume them either directly or through
//! their serialized form.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Normalized, renderer-ready representation of one descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocNode {
    /// The schema denotes a value that must never be supplied.
    Denied(DeniedNode),
    /// A conditional branch rather than a concrete value shape.
    Conditional(ConditionalNode),
    /// Every other normalized descriptor.
    Entry(Box<EntryNode>),
}

impl DocNode {
    /// Creates the denial sentinel.
    #[must_use]
    pub fn denied() -> Self {
        Self::Denied(DeniedNode { is_denied: true })
    }

    /// True when this node is the denial sentinel.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied(_))
    }

    /// Returns the entry node, if this is one.
    #[must_use]
    pub fn as_entry(&self) -> Option<&EntryNode> {
        match self {
            Self::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Sentinel marking a value that may never be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeniedNode {
    /// Always true; present so renderers can branch on it.
    #[serde(rename = "isDenied")]
    pub is_denied: bool,
}

/// A normalized conditional: "when `condition` holds, `then`, otherwise
/// `otherwise`". Carries no base fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionalNode {
    /// The condition the referenced value is matched against.
    pub condition: Condition,
    /// Branch applied when the condition holds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub then: Option<Box<DocNode>>,
    /// Branch applied when the condition does not hold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otherwise: Option<Box<DocNode>>,
}

/// The "when" part of a conditional node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Condition {
    /// Reference key with its scheme prefix stripped.
    pub key: String,
    /// Normalized schema the referenced value is matched against.
    pub value: Box<DocNode>,
}

/// Normalized subset of descriptor flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeFlags {
    /// Whether unknown keys are allowed (object specific).
    #[serde(rename = "allowUnknown", skip_serializing_if = "Option::is_none")]
    pub allow_unknown: Option<bool>,
    /// Declared default value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Declared encoding (binary specific).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// Case-insensitive matching (string specific).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insensitive: Option<bool>,
    /// True when the value must be supplied.
    pub required: bool,
    /// True when the value must never be supplied.
    pub forbidden: bool,
    /// True when the value is stripped from the validated result.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub stripped: bool,
}

/// Normalized argument of one named rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleDoc {
    /// A literal argument, passed through; the empty string stands for
    /// "no argument".
    Value(Value),
    /// A reference argument.
    Ref {
        /// Formatted reference.
        #[serde(rename = "ref")]
        reference: String,
    },
    /// An assertion argument.
    Assert {
        /// Formatted reference to the asserted-on value.
        key: String,
        /// Normalized schema the referenced value must satisfy.
        value: Box<DocNode>,
    },
}

impl RuleDoc {
    /// The "no argument" marker.
    #[must_use]
    pub fn empty() -> Self {
        Self::Value(Value::String(String::new()))
    }

    /// True when the rule carries no argument.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Value(Value::Null) => true,
            Self::Value(Value::String(text)) => text.is_empty(),
            _ => false,
        }
    }
}

/// Shape-specific extension of an entry node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EntryShape {
    /// Object: named children first, then pattern-keyed children.
    Object {
        /// Child nodes in display order.
        children: Vec<DocNode>,
    },
    /// Array: item schemas split by whether they are forbidden.
    Array {
        /// Schemas any item may match.
        items: Vec<DocNode>,
        /// Schemas no item may match.
        #[serde(rename = "forbiddenItems")]
        forbidden_items: Vec<DocNode>,
        /// Positional item schemas.
        #[serde(rename = "orderedItems", skip_serializing_if = "Vec::is_empty")]
        ordered_items: Vec<DocNode>,
    },
    /// Alternatives, in declaration order.
    Alternatives {
        /// The normalized alternatives.
        alternatives: Vec<DocNode>,
    },
    /// No shape-specific fields.
    Scalar {},
}

/// The common body of a normalized node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryNode {
    /// Display name: the field name, a pattern source, or the type name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// True when no explicit name was given and the type name is used as
    /// the label.
    #[serde(rename = "typeIsName")]
    pub type_is_name: bool,
    /// True on the node returned for a whole validation location.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub root: bool,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Usage notes, normalized to a sequence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
    /// Classification tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Arbitrary schema-author metadata.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub meta: Vec<Value>,
    /// Unit of measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Display type name; may be rewritten to `reference` or, by the
    /// brevity collapse, to a rule name.
    #[serde(rename = "type")]
    pub type_name: String,
    /// Formatted allowed values.
    #[serde(rename = "allowedValues", skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<String>,
    /// Formatted disallowed values.
    #[serde(rename = "disallowedValues", skip_serializing_if = "Option::is_none")]
    pub disallowed_values: Option<String>,
    /// Example values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Value>,
    /// Formatted peer-dependency sentences.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peers: Option<Vec<String>>,
    /// Formatted reference target; present only for reference nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Normalized flags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<NodeFlags>,
    /// Capitalized rule name to normalized argument. Empty for
    /// alternatives nodes and after the brevity collapse.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub rules: IndexMap<String, RuleDoc>,
    /// Shape-specific extension.
    #[serde(flatten)]
    pub shape: EntryShape,
}
