//! Tests for primitive decoders against canonical valid and invalid inputs.

use schematist::{erase, Decoder, Decoders, ErrorKind, Value, ValueDecoder};
use serde_json::json;
use std::sync::Arc;

fn kind_of<T>(result: schematist::DecodeResult<T>) -> Option<ErrorKind> {
    result.into_result().err().and_then(|report| report.kind())
}

#[test]
fn test_valid_inputs_decode_to_equal_values() {
    let cases: Vec<(Arc<dyn ValueDecoder>, Value)> = vec![
        (erase(Decoders::string()), Value::from("hello")),
        (erase(Decoders::number()), Value::from(-3.5)),
        (erase(Decoders::boolean()), Value::from(true)),
        (erase(Decoders::unit()), Value::Null),
        (erase(Decoders::undef()), Value::Undefined),
        (
            erase(Decoders::unknown()),
            Value::from(json!({ "nested": [1, "two", null] })),
        ),
    ];

    for (decoder, input) in cases {
        assert_eq!(decoder.decode_value(&input).into_result().unwrap(), input);
    }
}

#[test]
fn test_string_rejects_other_types() {
    for input in [Value::Null, Value::Undefined, Value::from(1.0), Value::from(json!({}))] {
        assert_eq!(
            kind_of(Decoders::string().decode(&input)),
            Some(ErrorKind::UnexpectedType)
        );
    }
}

#[test]
fn test_number_rejects_numeric_strings() {
    assert_eq!(
        kind_of(Decoders::number().decode(&Value::from("42"))),
        Some(ErrorKind::UnexpectedType)
    );
}

#[test]
fn test_number_accepts_nan() {
    assert!(Decoders::number().is(&Value::from(f64::NAN)));
}

#[test]
fn test_boolean_rejects_truthy_values() {
    for input in [Value::from(1.0), Value::from("true"), Value::from(json!([true]))] {
        assert!(!Decoders::boolean().is(&input));
    }
}

#[test]
fn test_unit_and_undefined_are_distinct() {
    assert!(Decoders::unit().is(&Value::Null));
    assert!(!Decoders::unit().is(&Value::Undefined));
    assert!(Decoders::undef().is(&Value::Undefined));
    assert!(!Decoders::undef().is(&Value::Null));
}

#[test]
fn test_never_reports_never() {
    assert_eq!(
        kind_of(Decoders::never().decode(&Value::from("anything"))),
        Some(ErrorKind::Never)
    );
}

#[test]
fn test_literal() {
    let decoder = Decoders::literal("admin");
    assert_eq!(
        decoder.decode(&Value::from("admin")).into_result().unwrap(),
        Value::from("admin")
    );

    let report = decoder.decode(&Value::from("user")).into_result().unwrap_err();
    let error = report.as_leaf().unwrap();
    assert_eq!(error.kind, ErrorKind::UnexpectedType);
    assert_eq!(error.expected.as_deref(), Some("\"admin\""));
}

#[test]
fn test_literal_nan_does_not_match_nan() {
    assert_eq!(
        kind_of(Decoders::literal(f64::NAN).decode(&Value::from(f64::NAN))),
        Some(ErrorKind::UnexpectedType)
    );
}

#[test]
fn test_literal_booleans_and_null() {
    assert!(Decoders::literal(true).is(&Value::from(true)));
    assert!(!Decoders::literal(true).is(&Value::from(false)));
    assert!(Decoders::literal(()).is(&Value::Null));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for JSON values with finite numbers.
    fn json_value() -> impl Strategy<Value = serde_json::Value> {
        let leaf = prop_oneof![
            Just(serde_json::Value::Null),
            any::<bool>().prop_map(serde_json::Value::Bool),
            any::<i32>().prop_map(|n| json!(n)),
            "[a-zA-Z0-9_ ]{0,20}".prop_map(serde_json::Value::String),
        ];
        leaf.prop_recursive(4, 64, 8, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..8).prop_map(serde_json::Value::Array),
                prop::collection::btree_map("[a-z]{1,10}", inner, 0..8).prop_map(|m| {
                    let map: serde_json::Map<String, serde_json::Value> = m.into_iter().collect();
                    serde_json::Value::Object(map)
                }),
            ]
        })
    }

    proptest! {
        /// Unknown decodes every value to an equal value.
        #[test]
        fn unknown_preserves_input(value in json_value()) {
            let input = Value::from(value);
            let decoded = Decoders::unknown().decode(&input).into_result();
            prop_assert_eq!(decoded.ok(), Some(input));
        }

        /// Strings decode to themselves.
        #[test]
        fn string_preserves_input(s in ".*") {
            let decoded = Decoders::string().decode(&Value::from(s.as_str())).into_result();
            prop_assert_eq!(decoded.ok(), Some(s));
        }

        /// A dict of unknowns accepts any object and returns an equal object.
        #[test]
        fn dict_preserves_objects(
            entries in prop::collection::btree_map("[a-z]{1,10}", json_value(), 0..8)
        ) {
            let object: serde_json::Map<String, serde_json::Value> = entries.into_iter().collect();
            let input = Value::from(serde_json::Value::Object(object));
            let decoded = Decoders::dict(Decoders::unknown()).decode_to_value(&input).into_result();
            prop_assert_eq!(decoded.ok(), Some(input));
        }

        /// Converting back to JSON and in again yields an equal value.
        #[test]
        fn json_conversion_is_lossless(value in json_value()) {
            let input = Value::from(value);
            let converted = serde_json::Value::try_from(input.clone()).map(Value::from);
            prop_assert_eq!(converted.ok(), Some(input));
        }
    }
}
