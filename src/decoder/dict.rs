//! Dictionary decoding.
//!
//! This module provides [`DictDecoder`] for validating open-ended mappings
//! from arbitrary string keys to values of one decoded type.

use std::sync::Arc;

use indexmap::IndexMap;
use stillwater::Validation;

use crate::error::{DecodeError, DecodeReport, ReportChildren, ReportEntry};
use crate::path::LocationKey;
use crate::result::{fail, success, DecodeResult};
use crate::value::Value;

use super::traits::{Children, Decoder, Traversable, ValueDecoder};

/// A decoder for objects whose every value is decoded by one entry decoder.
///
/// Unlike a record, any key is accepted. Failing entries are reported under
/// their own key. An array input is treated as an object keyed by element
/// index (`"0"`, `"1"`, ...), and decodes to such an object.
///
/// # Example
///
/// ```rust
/// use schematist::{Decoder, Decoders, ErrorKind, Location, Value};
/// use serde_json::json;
///
/// let scores = Decoders::dict(Decoders::number());
///
/// let decoded = scores
///     .decode(&Value::from(json!({ "alice": 3, "bob": 5 })))
///     .into_result()
///     .unwrap();
/// assert_eq!(decoded["bob"], 5.0);
///
/// let report = scores
///     .decode(&Value::from(json!({ "a": 1, "b": "x" })))
///     .into_result()
///     .unwrap_err();
/// let at_b = report.at(&Location::root().push("b")).unwrap();
/// assert_eq!(at_b.kind(), Some(ErrorKind::UnexpectedType));
/// assert!(report.at(&Location::root().push("a")).is_none());
/// ```
pub struct DictDecoder<D> {
    entry: Arc<D>,
}

impl<D: Decoder + 'static> DictDecoder<D> {
    /// Creates a new dictionary decoder with the given entry decoder.
    pub fn new(entry: D) -> Self {
        Self {
            entry: Arc::new(entry),
        }
    }

    /// Returns the decoder applied to every entry.
    pub fn entry(&self) -> &D {
        &self.entry
    }

    fn decode_entries<T, F>(&self, input: &Value, decode_entry: F) -> DecodeResult<IndexMap<String, T>>
    where
        F: Fn(&D, &Value) -> DecodeResult<T>,
    {
        let entries: Vec<(String, &Value)> = match input {
            Value::Object(object) => object.iter().map(|(key, value)| (key.clone(), value)).collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value))
                .collect(),
            _ => return fail(DecodeError::unexpected_type("object")),
        };

        let mut report = ReportChildren::new();
        let mut decoded = IndexMap::with_capacity(entries.len());

        for (key, value) in entries {
            match decode_entry(&self.entry, value) {
                Validation::Success(v) => {
                    decoded.insert(key, v);
                }
                Validation::Failure(entry_report) => {
                    report.insert(
                        LocationKey::Field(key),
                        ReportEntry::with_given(value.clone(), entry_report),
                    );
                }
            }
        }

        match DecodeReport::children(report) {
            Some(report) => fail(report),
            None => success(decoded),
        }
    }
}

impl<D> Clone for DictDecoder<D> {
    fn clone(&self) -> Self {
        Self {
            entry: Arc::clone(&self.entry),
        }
    }
}

impl<D: Decoder + 'static> Decoder for DictDecoder<D> {
    type Output = IndexMap<String, D::Output>;

    fn decode(&self, input: &Value) -> DecodeResult<Self::Output> {
        self.decode_entries(input, |entry, value| entry.decode(value))
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.decode_entries(input, |entry, value| entry.decode_to_value(value))
            .map(Value::Object)
    }

    fn as_traversable(&self) -> Option<&dyn Traversable> {
        Some(self)
    }
}

impl<D: Decoder + 'static> Traversable for DictDecoder<D> {
    fn children(&self) -> Children {
        let mut children = Children::with_capacity(1);
        children.insert(
            LocationKey::DictEntry,
            Arc::clone(&self.entry) as Arc<dyn ValueDecoder>,
        );
        children
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{NumberDecoder, RecordDecoder, StringDecoder};
    use crate::error::ErrorKind;
    use crate::path::Location;
    use serde_json::json;

    #[test]
    fn test_accepts_any_keys() {
        let decoder = DictDecoder::new(NumberDecoder);
        let decoded = decoder
            .decode(&Value::from(json!({ "x": 1, "y": 2, "zzz": 3 })))
            .into_result()
            .unwrap();
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded["zzz"], 3.0);
    }

    #[test]
    fn test_empty_object() {
        let decoder = DictDecoder::new(StringDecoder);
        assert!(decoder.decode(&Value::from(json!({}))).is_success());
    }

    #[test]
    fn test_rejects_non_objects() {
        let decoder = DictDecoder::new(StringDecoder);
        for input in [Value::Null, Value::Undefined, Value::from("x"), Value::from(true)] {
            let report = decoder.decode(&input).into_result().unwrap_err();
            assert_eq!(report.kind(), Some(ErrorKind::UnexpectedType));
        }
    }

    #[test]
    fn test_reports_only_failing_entries() {
        let decoder = DictDecoder::new(NumberDecoder);
        let report = decoder
            .decode(&Value::from(json!({ "a": 1, "b": "x", "c": null })))
            .into_result()
            .unwrap_err();

        let children = report.as_children().unwrap();
        assert_eq!(children.len(), 2);
        assert!(children.get(&LocationKey::field("a")).is_none());
        assert_eq!(
            children[&LocationKey::field("b")].given,
            Some(Value::from("x"))
        );
    }

    #[test]
    fn test_array_input_is_keyed_by_index() {
        let decoder = DictDecoder::new(StringDecoder);
        let result = decoder.decode_to_value(&Value::from(json!(["a", "b"])));
        assert_eq!(
            result.into_result().unwrap(),
            Value::from(json!({ "0": "a", "1": "b" }))
        );

        let report = decoder
            .decode(&Value::from(json!(["a", 2])))
            .into_result()
            .unwrap_err();
        assert!(report.at(&Location::root().push("1")).is_some());
    }

    #[test]
    fn test_dict_of_records_reports_nested_location() {
        let decoder = DictDecoder::new(RecordDecoder::new().field("role", StringDecoder));
        let report = decoder
            .decode(&Value::from(json!({ "bob": { "role": 1 } })))
            .into_result()
            .unwrap_err();

        let location = Location::root().push("bob").push("role");
        assert_eq!(
            report.at(&location).and_then(|r| r.kind()),
            Some(ErrorKind::UnexpectedType)
        );
    }

    #[test]
    fn test_children_hold_entry_slot() {
        let decoder = DictDecoder::new(NumberDecoder);
        let children = decoder.children();
        assert_eq!(children.len(), 1);
        assert!(children.contains_key(&LocationKey::DictEntry));
    }
}
