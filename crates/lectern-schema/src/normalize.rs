//! The schema-description normalizer.
//!
//! This module implements the recursive transform from a
//! [`SchemaDescription`] to a [`DocNode`]: the tree a renderer consumes.
//! The transform is pure, allocates its output fresh on every call, and
//! is total over well-formed descriptions.
//!
//! Normalization applies, in order:
//!
//! 1. denial detection (an unnamed object whose children mapping is
//!    present but empty means "never supply this value")
//! 2. conditional branching (`ref`/`is`/`then`/`otherwise` descriptors
//!    become branch nodes without base fields)
//! 3. effective-type resolution (a descriptor whose allowed values
//!    contain a reference documents as type `reference`)
//! 4. base-field construction and shape-specific extension
//! 5. the brevity collapse (a type refined by exactly one bare rule is
//!    displayed as that rule)

use indexmap::IndexMap;

use crate::description::{
    ConstraintValue, Flags, Notes, Presence, RuleArgument, SchemaDescription, Shape,
};
use crate::node::{
    Condition, ConditionalNode, DocNode, EntryNode, EntryShape, NodeFlags, RuleDoc,
};
use crate::value::{capitalize, format_existing_values, format_peer_dependency, format_reference};

/// Normalizes a whole validation location.
///
/// Returns `None` when no schema is attached to the location. The
/// returned entry node is marked as a root so renderers can treat it as
/// the top of a tree.
#[must_use]
pub fn describe(descriptor: Option<&SchemaDescription>) -> Option<DocNode> {
    let mut node = normalize(descriptor?, None, None);
    if let DocNode::Entry(entry) = &mut node {
        entry.root = true;
    }
    Some(node)
}

/// Normalizes one descriptor into one doc node.
///
/// `name` is the label the descriptor carries in its parent (a field
/// name or a pattern source); `type_fallback` labels unnamed conditional
/// sub-nodes with their own type name.
#[must_use]
pub fn normalize(
    descriptor: &SchemaDescription,
    name: Option<&str>,
    type_fallback: Option<&str>,
) -> DocNode {
    // An unnamed object whose children mapping is present but empty
    // denotes a value that must never be provided.
    if name.is_none() {
        if let Shape::Object {
            children: Some(children),
            ..
        } = &descriptor.shape
        {
            if children.is_empty() {
                return DocNode::denied();
            }
        }
    }

    if let Shape::Conditional {
        reference,
        is,
        then,
        otherwise,
    } = &descriptor.shape
    {
        return DocNode::Conditional(ConditionalNode {
            condition: Condition {
                key: strip_scheme(reference).to_string(),
                value: Box::new(normalize(is, None, Some(is.shape.type_name()))),
            },
            then: then
                .as_deref()
                .map(|branch| Box::new(normalize(branch, None, Some(branch.shape.type_name())))),
            otherwise: otherwise
                .as_deref()
                .map(|branch| Box::new(normalize(branch, None, Some(branch.shape.type_name())))),
        });
    }

    let is_reference = descriptor.valids.iter().any(ConstraintValue::is_reference);
    let type_name = if is_reference {
        "reference"
    } else {
        descriptor.shape.type_name()
    };

    let mut entry = EntryNode {
        name: name
            .map(str::to_string)
            .or_else(|| type_fallback.map(str::to_string)),
        type_is_name: name.is_none() && type_fallback.is_some(),
        root: false,
        description: descriptor.description.clone(),
        notes: descriptor.notes.as_ref().map(Notes::to_list),
        tags: descriptor.tags.clone(),
        meta: descriptor.meta.clone(),
        unit: descriptor.unit.clone(),
        type_name: type_name.to_string(),
        allowed_values: if is_reference {
            None
        } else {
            format_existing_values(type_name, &descriptor.valids)
        },
        disallowed_values: if is_reference {
            None
        } else {
            format_existing_values(type_name, &descriptor.invalids)
        },
        examples: descriptor.examples.clone(),
        peers: if descriptor.dependencies.is_empty() {
            None
        } else {
            Some(
                descriptor
                    .dependencies
                    .iter()
                    .map(format_peer_dependency)
                    .collect(),
            )
        },
        target: if is_reference {
            format_existing_values(type_name, &descriptor.valids)
        } else {
            None
        },
        flags: descriptor.flags.as_ref().map(node_flags),
        rules: IndexMap::new(),
        shape: EntryShape::Scalar {},
    };

    match &descriptor.shape {
        Shape::Object { children, patterns } => {
            let mut nodes = Vec::new();
            if let Some(children) = children {
                for (key, child) in children {
                    nodes.push(normalize(child, Some(key.as_str()), None));
                }
            }
            for pattern in patterns {
                nodes.push(normalize(&pattern.rule, Some(pattern.regex.as_str()), None));
            }
            entry.shape = EntryShape::Object { children: nodes };
        }
        Shape::Array {
            items,
            ordered_items,
        } => {
            let ordered = ordered_items
                .iter()
                .map(|item| normalize(item, None, None))
                .collect();

            let mut kept = Vec::new();
            let mut forbidden = Vec::new();
            for item in items {
                let node = normalize(item, None, None);
                if is_forbidden(&node) {
                    forbidden.push(node);
                } else {
                    kept.push(node);
                }
            }

            entry.shape = EntryShape::Array {
                items: kept,
                forbidden_items: forbidden,
                ordered_items: ordered,
            };
        }
        Shape::Alternatives { alternatives } => {
            entry.shape = EntryShape::Alternatives {
                alternatives: alternatives
                    .iter()
                    .map(|alternative| normalize(alternative, None, None))
                    .collect(),
            };
        }
        // Conditionals returned above; scalars have no extension.
        Shape::Conditional { .. } | Shape::Value(_) => {}
    }

    // Alternatives nodes carry no rules mapping.
    if !matches!(descriptor.shape, Shape::Alternatives { .. }) {
        // Duplicate rule names overwrite earlier entries.
        let mut rules: IndexMap<String, (String, RuleDoc)> = IndexMap::new();
        for rule in &descriptor.rules {
            rules.insert(
                capitalize(&rule.name),
                (rule.name.clone(), rule_doc(&rule.argument)),
            );
        }

        // A type refined by exactly one bare rule reads better as that
        // rule: "alphanum" rather than "string" plus an annotation.
        let collapsed = (rules.len() == 1)
            .then(|| rules.get_index(0))
            .flatten()
            .filter(|(_, (_, argument))| argument.is_empty())
            .map(|(_, (rule_name, _))| rule_name.clone());

        if let Some(rule_name) = collapsed {
            entry.type_name = rule_name;
        } else {
            entry.rules = rules
                .into_iter()
                .map(|(key, (_, argument))| (key, argument))
                .collect();
        }
    }

    DocNode::Entry(Box::new(entry))
}

fn rule_doc(argument: &RuleArgument) -> RuleDoc {
    match argument {
        RuleArgument::None => RuleDoc::empty(),
        RuleArgument::Literal(value) => RuleDoc::Value(value.clone()),
        RuleArgument::Reference(reference) => RuleDoc::Ref {
            reference: format_reference(reference),
        },
        RuleArgument::Assert { reference, cast } => RuleDoc::Assert {
            key: format_reference(reference),
            value: Box::new(normalize(cast, None, None)),
        },
    }
}

fn node_flags(flags: &Flags) -> NodeFlags {
    NodeFlags {
        allow_unknown: flags.allow_unknown,
        default: flags.default.clone(),
        encoding: flags.encoding.clone(),
        insensitive: flags.insensitive,
        required: flags.presence == Presence::Required,
        forbidden: flags.presence == Presence::Forbidden,
        stripped: flags.strip,
    }
}

fn is_forbidden(node: &DocNode) -> bool {
    node.as_entry()
        .and_then(|entry| entry.flags.as_ref())
        .is_some_and(|flags| flags.forbidden)
}

/// Strips the scheme prefix from a raw reference key (`ref:a.b` → `a.b`).
fn strip_scheme(reference: &str) -> &str {
    reference
        .split_once(':')
        .map_or(reference, |(_, key)| key)
}
