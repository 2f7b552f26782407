//! Property tests for the normalizer: total over generated descriptors,
//! and every output serializes.

use indexmap::IndexMap;
use lectern_schema::{
    describe, normalize, ConstraintValue, DocNode, Reference, Rule, RuleArgument,
    SchemaDescription, Shape, ValueType,
};
use proptest::prelude::*;
use serde_json::json;

fn value_type() -> impl Strategy<Value = ValueType> {
    prop_oneof![
        Just(ValueType::Any),
        Just(ValueType::Boolean),
        Just(ValueType::Date),
        Just(ValueType::Number),
        Just(ValueType::String),
    ]
}

fn constraint_value() -> impl Strategy<Value = ConstraintValue> {
    prop_oneof![
        any::<i64>().prop_map(|n| ConstraintValue::Literal(json!(n))),
        "[a-z]{0,6}".prop_map(|s| ConstraintValue::Literal(json!(s))),
        any::<bool>().prop_map(|negative| ConstraintValue::Unbounded { negative }),
        ("[a-z]{1,6}", any::<bool>()).prop_map(|(key, context)| {
            ConstraintValue::Reference(Reference { key, context })
        }),
    ]
}

fn rule() -> impl Strategy<Value = Rule> {
    (
        "[a-z]{1,8}",
        prop_oneof![
            Just(RuleArgument::None),
            any::<u32>().prop_map(|n| RuleArgument::Literal(json!(n))),
            "[a-z]{1,6}".prop_map(|key| RuleArgument::Reference(Reference::field(key))),
        ],
    )
        .prop_map(|(name, argument)| Rule { name, argument })
}

fn leaf() -> impl Strategy<Value = SchemaDescription> {
    (
        value_type(),
        proptest::collection::vec(constraint_value(), 0..3),
        proptest::collection::vec(rule(), 0..3),
    )
        .prop_map(|(value_type, valids, rules)| {
            let mut descriptor = SchemaDescription::value(value_type);
            descriptor.valids = valids;
            descriptor.rules = rules;
            descriptor
        })
}

fn descriptor() -> impl Strategy<Value = SchemaDescription> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..3).prop_map(|items| {
                SchemaDescription::of(Shape::Array {
                    items,
                    ordered_items: Vec::new(),
                })
            }),
            proptest::collection::vec(inner.clone(), 1..3).prop_map(|alternatives| {
                SchemaDescription::of(Shape::Alternatives { alternatives })
            }),
            proptest::collection::btree_map("[a-z]{1,5}", inner.clone(), 0..3).prop_map(
                |children| {
                    SchemaDescription::of(Shape::Object {
                        children: Some(children.into_iter().collect::<IndexMap<_, _>>()),
                        patterns: Vec::new(),
                    })
                }
            ),
            (inner.clone(), proptest::option::of(inner)).prop_map(|(is, then)| {
                SchemaDescription::of(Shape::Conditional {
                    reference: "ref:kind".to_string(),
                    is: Box::new(is),
                    then: then.map(Box::new),
                    otherwise: None,
                })
            }),
        ]
    })
}

proptest! {
    #[test]
    fn normalize_is_total(descriptor in descriptor()) {
        let _ = normalize(&descriptor, Some("field"), None);
        let _ = normalize(&descriptor, None, None);
        let _ = describe(Some(&descriptor));
    }

    #[test]
    fn output_serializes(descriptor in descriptor()) {
        if let Some(node) = describe(Some(&descriptor)) {
            serde_json::to_value(&node).expect("doc node serializes");
        }
    }

    #[test]
    fn denial_only_for_unnamed_empty_objects(descriptor in descriptor()) {
        let node = normalize(&descriptor, None, None);
        let empty_object = matches!(
            &descriptor.shape,
            Shape::Object { children: Some(children), .. } if children.is_empty()
        );
        prop_assert_eq!(node.is_denied(), empty_object);

        // A name suppresses the denial sentinel entirely.
        let named = normalize(&descriptor, Some("field"), None);
        prop_assert!(!named.is_denied());
    }

    #[test]
    fn conditional_outputs_carry_no_base_fields(descriptor in descriptor()) {
        let node = normalize(&descriptor, None, None);
        let conditional_input = matches!(&descriptor.shape, Shape::Conditional { .. });
        prop_assert_eq!(matches!(node, DocNode::Conditional(_)), conditional_input);
    }
}
