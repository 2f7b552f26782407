//! Rendering of individual constraint values as display strings.

use serde_json::Value;

use crate::description::{ConstraintValue, PeerDependency, PeerRelation, Reference};

/// Formats a reference for display: `$key` when it resolves against
/// request-scoped context, the bare key otherwise.
#[must_use]
pub fn format_reference(reference: &Reference) -> String {
    if reference.context {
        format!("${}", reference.key)
    } else {
        reference.key.clone()
    }
}

/// Formats a sequence of allowed or disallowed values for display.
///
/// Values that express "no constraint" are dropped: empty strings, and
/// the unbounded numeric sentinels when the effective type is numeric.
/// References format via [`format_reference`]; literals via their JSON
/// encoding so documentation matches the wire representation. Returns
/// `None` when nothing survives.
#[must_use]
pub fn format_existing_values(type_name: &str, values: &[ConstraintValue]) -> Option<String> {
    let formatted: Vec<String> = values
        .iter()
        .filter_map(|value| match value {
            ConstraintValue::Literal(Value::String(text)) if text.is_empty() => None,
            ConstraintValue::Literal(literal) => Some(encode_literal(literal)),
            ConstraintValue::Reference(reference) => Some(format_reference(reference)),
            ConstraintValue::Unbounded { .. } if type_name == "number" => None,
            ConstraintValue::Unbounded { .. } => Some("null".to_string()),
        })
        .collect();

    if formatted.is_empty() {
        None
    } else {
        Some(formatted.join(", "))
    }
}

/// Formats a peer constraint as an English sentence.
#[must_use]
pub fn format_peer_dependency(dependency: &PeerDependency) -> String {
    if let Some(key) = &dependency.key {
        let polarity = if dependency.relation == PeerRelation::With {
            ""
        } else {
            "not "
        };
        format!(
            "Requires {} to {}be present when {} is.",
            dependency.peers.join(", "),
            polarity,
            key
        )
    } else {
        let separator = format!(" {} ", dependency.relation.as_str());
        format!("Requires {}.", dependency.peers.join(separator.as_str()))
    }
}

/// Capitalizes the first character of a rule name.
#[must_use]
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn encode_literal(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_reference() {
        assert_eq!(format_reference(&Reference::field("sibling")), "sibling");
        assert_eq!(format_reference(&Reference::context("userId")), "$userId");
    }

    #[test]
    fn test_format_existing_values_empty_is_none() {
        assert_eq!(format_existing_values("string", &[]), None);
    }

    #[test]
    fn test_format_existing_values_drops_empty_strings() {
        let values = vec![
            ConstraintValue::Literal(json!("")),
            ConstraintValue::Literal(json!("first")),
        ];
        assert_eq!(
            format_existing_values("string", &values),
            Some("\"first\"".to_string())
        );
    }

    #[test]
    fn test_format_existing_values_drops_numeric_sentinels() {
        let values = vec![
            ConstraintValue::Unbounded { negative: false },
            ConstraintValue::Unbounded { negative: true },
        ];
        assert_eq!(format_existing_values("number", &values), None);
    }

    #[test]
    fn test_format_existing_values_json_encoding() {
        let values = vec![
            ConstraintValue::Literal(json!("first")),
            ConstraintValue::Literal(json!(42)),
            ConstraintValue::Literal(json!(true)),
        ];
        assert_eq!(
            format_existing_values("any", &values),
            Some("\"first\", 42, true".to_string())
        );
    }

    #[test]
    fn test_format_existing_values_mixes_references() {
        let values = vec![
            ConstraintValue::Reference(Reference::context("limit")),
            ConstraintValue::Literal(json!(10)),
        ];
        assert_eq!(
            format_existing_values("number", &values),
            Some("$limit, 10".to_string())
        );
    }

    #[test]
    fn test_format_peer_dependency_with_key() {
        let dependency = PeerDependency {
            relation: PeerRelation::With,
            peers: vec!["a".to_string(), "b".to_string()],
            key: Some("c".to_string()),
        };
        assert_eq!(
            format_peer_dependency(&dependency),
            "Requires a, b to be present when c is."
        );
    }

    #[test]
    fn test_format_peer_dependency_without_key_negates() {
        let dependency = PeerDependency {
            relation: PeerRelation::Without,
            peers: vec!["a".to_string()],
            key: Some("c".to_string()),
        };
        assert_eq!(
            format_peer_dependency(&dependency),
            "Requires a to not be present when c is."
        );
    }

    #[test]
    fn test_format_peer_dependency_relation_join() {
        let dependency = PeerDependency {
            relation: PeerRelation::Xor,
            peers: vec!["a".to_string(), "b".to_string()],
            key: None,
        };
        assert_eq!(format_peer_dependency(&dependency), "Requires a xor b.");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("min"), "Min");
        assert_eq!(capitalize("alphanum"), "Alphanum");
        assert_eq!(capitalize(""), "");
    }
}
