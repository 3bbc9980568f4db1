//! Tests for recursive decoders built with lazy binding and registry references.

use schematist::{
    erase, locate, traverse, Decoder, DecoderRegistry, Decoders, ErrorKind, LazyDecoder, Location,
    LocationKey, RecordDecoder, Value,
};
use serde_json::json;

fn comment() -> RecordDecoder {
    Decoders::record()
        .field("text", Decoders::string())
        .field(
            "replies",
            Decoders::optional(Decoders::dict(Decoders::lazy(comment))),
        )
}

#[test]
fn test_lazy_self_reference() {
    let input = Value::from(json!({
        "text": "Top comment",
        "replies": {
            "0": { "text": "Reply 1" },
            "1": {
                "text": "Reply 2",
                "replies": { "0": { "text": "Nested reply" } }
            }
        }
    }));
    assert!(comment().is(&input));
}

#[test]
fn test_lazy_reports_deep_failures() {
    let input = Value::from(json!({
        "text": "Top",
        "replies": { "0": { "text": "Reply", "replies": { "0": { "text": 5 } } } }
    }));
    let report = comment().decode(&input).into_result().unwrap_err();

    // optional() wraps the dict, so each level goes through alternative 0
    let location = Location::root()
        .push("replies")
        .push(LocationKey::index(0))
        .push("0")
        .push("replies")
        .push(LocationKey::index(0))
        .push("0")
        .push("text");
    assert_eq!(
        report.at(&location).and_then(|r| r.kind()),
        Some(ErrorKind::UnexpectedType)
    );
}

#[test]
fn test_lazy_decoder_is_built_once() {
    let decoder = LazyDecoder::new(comment);
    assert!(!decoder.is_forced());

    for _ in 0..3 {
        assert!(decoder.is(&Value::from(json!({ "text": "a" }))));
    }
    assert!(decoder.is_forced());
}

#[test]
fn test_registry_self_reference() {
    let registry = DecoderRegistry::new();
    registry
        .register(
            "Tree",
            Decoders::record()
                .field("label", Decoders::string())
                .field("children", Decoders::dict(registry.reference("Tree"))),
        )
        .unwrap();

    let input = Value::from(json!({
        "label": "root",
        "children": {
            "left": { "label": "l", "children": {} },
            "right": { "label": "r", "children": { "x": { "label": "x", "children": {} } } }
        }
    }));
    assert!(registry.decode("Tree", &input).unwrap().is_success());

    let bad = Value::from(json!({
        "label": "root",
        "children": { "left": { "label": "l" } }
    }));
    let report = registry
        .decode("Tree", &bad)
        .unwrap()
        .into_result()
        .unwrap_err();
    let location = Location::root().push("children").push("left").push("children");
    assert_eq!(
        report.at(&location).and_then(|r| r.kind()),
        Some(ErrorKind::PropMissing)
    );
}

#[test]
fn test_mutual_references_resolve_regardless_of_registration_order() {
    let registry = DecoderRegistry::new();
    registry
        .register(
            "A",
            Decoders::record()
                .field("name", Decoders::string())
                .field("b", Decoders::optional(registry.reference("B"))),
        )
        .unwrap();

    assert_eq!(registry.unresolved_refs(), vec!["B"]);

    registry
        .register(
            "B",
            Decoders::record()
                .field("value", Decoders::number())
                .field("a", Decoders::optional(registry.reference("A"))),
        )
        .unwrap();

    assert!(registry.unresolved_refs().is_empty());

    let input = Value::from(json!({
        "name": "first",
        "b": { "value": 1, "a": { "name": "second" } }
    }));
    assert!(registry.decode("A", &input).unwrap().is_success());
}

#[test]
fn test_unresolved_reference_is_a_decode_failure() {
    let registry = DecoderRegistry::new();
    registry
        .register("User", Decoders::record().field("id", registry.reference("UserId")))
        .unwrap();

    let report = registry
        .decode("User", &Value::from(json!({ "id": 1 })))
        .unwrap()
        .into_result()
        .unwrap_err();
    let id = report.at(&Location::root().push("id")).unwrap();
    let error = id.as_leaf().unwrap();
    assert_eq!(error.kind, ErrorKind::UnresolvedReference);
    assert_eq!(error.expected.as_deref(), Some("UserId"));
}

#[test]
fn test_traversal_stops_at_recursion_points() {
    let registry = DecoderRegistry::new();
    let root = erase(
        Decoders::record()
            .field("lazy", Decoders::lazy(comment))
            .field("reference", registry.reference("Anything")),
    );

    let mut locations = Vec::new();
    traverse(root.as_ref(), |_, location| locations.push(location.to_string()));
    assert_eq!(locations, vec!["", "lazy", "reference"]);

    assert!(locate(&root, &Location::root().push("lazy")).is_some());
    assert!(locate(&root, &Location::root().push("lazy").push("text")).is_none());
}
