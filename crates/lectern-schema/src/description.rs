//! The schema-description input model.
//!
//! A [`SchemaDescription`] is the structural description of an accepted
//! value shape, produced by a validation library when asked to describe
//! one of its compiled schemas. Descriptions are consumed read-only: the
//! normalizer walks them and emits [`DocNode`](crate::DocNode) trees, it
//! never validates values against them.
//!
//! The shape of a description is a closed tagged union ([`Shape`]), so
//! object/array/alternatives/conditional handling is a total match rather
//! than a set of field-presence checks.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scalar type of a value-shaped descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Any value.
    Any,
    /// Boolean value.
    Boolean,
    /// Binary buffer.
    Binary,
    /// Date value.
    Date,
    /// Function value.
    Function,
    /// Lazily resolved schema.
    Lazy,
    /// Numeric value.
    Number,
    /// String value.
    String,
    /// Symbol value.
    Symbol,
}

impl ValueType {
    /// Returns the lowercase type name used in documentation output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Boolean => "boolean",
            Self::Binary => "binary",
            Self::Date => "date",
            Self::Function => "function",
            Self::Lazy => "lazy",
            Self::Number => "number",
            Self::String => "string",
            Self::Symbol => "symbol",
        }
    }
}

/// A reference to another field or to a request-scoped context value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Key of the field or context entry the reference points at.
    pub key: String,
    /// True when the reference resolves against request-scoped context.
    #[serde(default)]
    pub context: bool,
}

impl Reference {
    /// Creates a reference to a sibling field.
    #[must_use]
    pub fn field(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            context: false,
        }
    }

    /// Creates a reference that resolves against request-scoped context.
    #[must_use]
    pub fn context(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            context: true,
        }
    }
}

/// One allowed or disallowed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstraintValue {
    /// A literal value, documented with its JSON encoding.
    Literal(Value),
    /// A reference to another field or context value.
    Reference(Reference),
    /// The validation library's internal "unbounded" numeric sentinel.
    Unbounded {
        /// True for the negative-infinity sentinel.
        negative: bool,
    },
}

impl ConstraintValue {
    /// True when the value is a reference rather than a literal.
    #[must_use]
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

/// Argument attached to a named constraint rule.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum RuleArgument {
    /// The rule takes no argument.
    #[default]
    None,
    /// A literal argument.
    Literal(Value),
    /// A reference argument.
    Reference(Reference),
    /// A nested assertion: the referenced value must match `cast`.
    Assert {
        /// Reference to the asserted-on value.
        reference: Reference,
        /// Schema the referenced value must satisfy.
        cast: Box<SchemaDescription>,
    },
}

/// A named constraint (e.g. `min`, `max`, `pattern`) with its argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Rule name as reported by the validation library.
    pub name: String,
    /// Optional rule argument.
    #[serde(default)]
    pub argument: RuleArgument,
}

impl Rule {
    /// Creates a rule without an argument.
    #[must_use]
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            argument: RuleArgument::None,
        }
    }

    /// Creates a rule with a literal argument.
    #[must_use]
    pub fn with_value(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            argument: RuleArgument::Literal(value),
        }
    }
}

/// Presence constraint attached to a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    /// The value may be supplied.
    #[default]
    Optional,
    /// The value must be supplied.
    Required,
    /// The value must never be supplied.
    Forbidden,
}

/// Flags attached to a descriptor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Flags {
    /// Presence constraint.
    #[serde(default)]
    pub presence: Presence,
    /// Declared default value.
    #[serde(default)]
    pub default: Option<Value>,
    /// Whether the value is stripped from the validated result.
    #[serde(default)]
    pub strip: bool,
    /// Whether unknown keys are allowed (object specific).
    #[serde(default)]
    pub allow_unknown: Option<bool>,
    /// Declared encoding (binary specific).
    #[serde(default)]
    pub encoding: Option<String>,
    /// Case-insensitive matching (string specific).
    #[serde(default)]
    pub insensitive: Option<bool>,
}

/// Relation between a field and its peers in a cross-field constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeerRelation {
    /// Peers must be present together with the key.
    With,
    /// Peers must be absent when the key is present.
    Without,
    /// All peers must be present together.
    And,
    /// Not all peers may be present together.
    Nand,
    /// At least one peer must be present.
    Or,
    /// Exactly one peer must be present.
    Xor,
}

impl PeerRelation {
    /// Returns the lowercase relation name used in peer sentences.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::With => "with",
            Self::Without => "without",
            Self::And => "and",
            Self::Nand => "nand",
            Self::Or => "or",
            Self::Xor => "xor",
        }
    }
}

/// A cross-field peer constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerDependency {
    /// Relation between the key (or the peer set) and the peers.
    pub relation: PeerRelation,
    /// Names of the peer fields.
    pub peers: Vec<String>,
    /// Anchor key for `with`/`without`-style constraints.
    #[serde(default)]
    pub key: Option<String>,
}

/// Free-form usage notes: either a single note or a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Notes {
    /// A single note.
    One(String),
    /// A sequence of notes.
    Many(Vec<String>),
}

impl Notes {
    /// Normalizes to a sequence; a single note becomes a one-element list.
    #[must_use]
    pub fn to_list(&self) -> Vec<String> {
        match self {
            Self::One(note) => vec![note.clone()],
            Self::Many(notes) => notes.clone(),
        }
    }
}

/// A dynamic-key rule: schema applied to keys matching a regex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRule {
    /// Source of the regex the keys must match.
    pub regex: String,
    /// Schema applied to matching keys.
    pub rule: SchemaDescription,
}

/// The shape of a descriptor, one variant per normalization branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// An object with named children and optional dynamic-key rules.
    Object {
        /// Named children. `Some` with no entries means no key is ever
        /// accepted, which is distinct from an unconstrained object.
        children: Option<IndexMap<String, SchemaDescription>>,
        /// Dynamic-key rules, in declaration order.
        patterns: Vec<PatternRule>,
    },
    /// An array with item schemas.
    Array {
        /// Schemas any item may match.
        items: Vec<SchemaDescription>,
        /// Positional item schemas.
        ordered_items: Vec<SchemaDescription>,
    },
    /// A set of alternative schemas tried in order.
    Alternatives {
        /// The alternatives, in declaration order.
        alternatives: Vec<SchemaDescription>,
    },
    /// A conditional schema: when `reference` matches `is`, apply `then`,
    /// otherwise apply `otherwise`.
    Conditional {
        /// Raw reference key, possibly scheme-prefixed (e.g. `ref:kind`).
        reference: String,
        /// Schema the referenced value is matched against.
        is: Box<SchemaDescription>,
        /// Schema applied when the condition holds.
        then: Option<Box<SchemaDescription>>,
        /// Schema applied when the condition does not hold.
        otherwise: Option<Box<SchemaDescription>>,
    },
    /// A scalar value of the given type.
    Value(ValueType),
}

impl Shape {
    /// Nominal type name of this shape.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Object { .. } => "object",
            Self::Array { .. } => "array",
            Self::Alternatives { .. } | Self::Conditional { .. } => "alternatives",
            Self::Value(value_type) => value_type.as_str(),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::Value(ValueType::Any)
    }
}

/// Structural description of an accepted value shape.
///
/// Descriptions are immutable snapshots; every field is public so hosts
/// can assemble them directly from whatever their validation layer
/// reports.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaDescription {
    /// The shape of the accepted value.
    pub shape: Shape,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Free-form usage notes.
    #[serde(default)]
    pub notes: Option<Notes>,
    /// Classification tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Arbitrary metadata attached by the schema author.
    #[serde(default)]
    pub meta: Vec<Value>,
    /// Unit of measure for the value.
    #[serde(default)]
    pub unit: Option<String>,
    /// Example values.
    #[serde(default)]
    pub examples: Vec<Value>,
    /// Allowed values.
    #[serde(default)]
    pub valids: Vec<ConstraintValue>,
    /// Disallowed values.
    #[serde(default)]
    pub invalids: Vec<ConstraintValue>,
    /// Named constraints, in declaration order.
    #[serde(default)]
    pub rules: Vec<Rule>,
    /// Flags attached to the descriptor.
    #[serde(default)]
    pub flags: Option<Flags>,
    /// Cross-field peer constraints.
    #[serde(default)]
    pub dependencies: Vec<PeerDependency>,
}

impl SchemaDescription {
    /// Creates a description with the given shape and no other facets.
    #[must_use]
    pub fn of(shape: Shape) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    /// Creates a scalar description of the given type.
    #[must_use]
    pub fn value(value_type: ValueType) -> Self {
        Self::of(Shape::Value(value_type))
    }

    /// Creates an object description with the given named children.
    #[must_use]
    pub fn object(children: IndexMap<String, SchemaDescription>) -> Self {
        Self::of(Shape::Object {
            children: Some(children),
            patterns: Vec::new(),
        })
    }

    /// Sets the description text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a named constraint.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Sets the allowed values.
    #[must_use]
    pub fn with_valids(mut self, valids: Vec<ConstraintValue>) -> Self {
        self.valids = valids;
        self
    }

    /// Sets the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Marks the value as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.flags.get_or_insert_with(Flags::default).presence = Presence::Required;
        self
    }

    /// Marks the value as forbidden.
    #[must_use]
    pub fn forbidden(mut self) -> Self {
        self.flags.get_or_insert_with(Flags::default).presence = Presence::Forbidden;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(ValueType::String.as_str(), "string");
        assert_eq!(Shape::default().type_name(), "any");
        assert_eq!(
            Shape::Object {
                children: None,
                patterns: Vec::new()
            }
            .type_name(),
            "object"
        );
        assert_eq!(
            Shape::Alternatives {
                alternatives: Vec::new()
            }
            .type_name(),
            "alternatives"
        );
    }

    #[test]
    fn test_notes_to_list() {
        assert_eq!(
            Notes::One("note".to_string()).to_list(),
            vec!["note".to_string()]
        );
        assert_eq!(
            Notes::Many(vec!["a".to_string(), "b".to_string()]).to_list(),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_presence_builders() {
        let required = SchemaDescription::value(ValueType::String).required();
        assert_eq!(
            required.flags.as_ref().map(|flags| flags.presence),
            Some(Presence::Required)
        );

        let forbidden = SchemaDescription::value(ValueType::Any).forbidden();
        assert_eq!(
            forbidden.flags.as_ref().map(|flags| flags.presence),
            Some(Presence::Forbidden)
        );
    }

    #[test]
    fn test_constraint_value_is_reference() {
        assert!(ConstraintValue::Reference(Reference::field("a")).is_reference());
        assert!(!ConstraintValue::Literal(Value::from(1)).is_reference());
        assert!(!ConstraintValue::Unbounded { negative: false }.is_reference());
    }
}
