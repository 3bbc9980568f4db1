//! Record decoding.
//!
//! This module provides [`RecordDecoder`] for validating plain objects against
//! an exact, closed set of named fields.

use std::sync::Arc;

use indexmap::IndexMap;
use stillwater::Validation;

use crate::error::{DecodeError, DecodeReport, ReportChildren, ReportEntry, SchemaError};
use crate::path::LocationKey;
use crate::result::{fail, success, DecodeResult};
use crate::value::Value;

use super::combinators::UnionDecoder;
use super::traits::{Children, Decoder, Traversable, ValueDecoder};

/// A decoder for plain objects with a closed set of fields.
///
/// `RecordDecoder` checks that the input is a plain object whose keys are
/// exactly the declared fields, and decodes every field value with its own
/// decoder. Every problem is reported in one pass:
/// - `prop-missing` for each declared field absent from the input
/// - `prop-unknown` for each input key that is not declared
/// - the field decoder's report for each field whose value is invalid
///
/// A field whose decoder accepts `undefined` (e.g. an `optional` field) may be
/// left out of the input, in which case it is also left out of the output.
///
/// # Example
///
/// ```rust
/// use schematist::{Decoder, Decoders, Value};
/// use serde_json::json;
///
/// let decoder = Decoders::record()
///     .field("name", Decoders::string())
///     .field("score", Decoders::number())
///     .field("nickname", Decoders::optional(Decoders::string()));
///
/// let result = decoder.decode(&Value::from(json!({ "name": "John", "score": 42 })));
/// assert!(result.is_success());
///
/// let result = decoder.decode(&Value::from(json!({ "name": "John", "extra": 1 })));
/// assert!(result.is_failure());
/// ```
#[derive(Clone, Default)]
pub struct RecordDecoder {
    fields: IndexMap<String, Arc<dyn ValueDecoder>>,
}

impl RecordDecoder {
    /// Creates a new record decoder with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record decoder from `(name, decoder)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::DuplicateField` if a name is declared twice.
    pub fn from_fields<K>(fields: Vec<(K, Arc<dyn ValueDecoder>)>) -> Result<Self, SchemaError>
    where
        K: Into<String>,
    {
        let mut map = IndexMap::with_capacity(fields.len());
        for (name, decoder) in fields {
            let name = name.into();
            if map.contains_key(&name) {
                return Err(SchemaError::DuplicateField(name));
            }
            map.insert(name, decoder);
        }
        Ok(Self { fields: map })
    }

    /// Adds a field to the record.
    ///
    /// Declaring the same name again replaces the earlier decoder and keeps
    /// the field's original position. Use [`RecordDecoder::from_fields`] to
    /// reject repeated names instead.
    pub fn field<D>(mut self, name: impl Into<String>, decoder: D) -> Self
    where
        D: Decoder + 'static,
    {
        self.fields.insert(name.into(), Arc::new(decoder));
        self
    }

    /// Returns the declared field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns a record with the same fields, each made optional.
    ///
    /// Fields that already accept `undefined` are kept as they are.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schematist::{Decoder, Decoders, Value};
    /// use serde_json::json;
    ///
    /// let full = Decoders::record()
    ///     .field("name", Decoders::string())
    ///     .field("score", Decoders::number());
    /// let patch = full.partial();
    ///
    /// assert!(patch.is(&Value::from(json!({ "score": 7 }))));
    /// assert!(!patch.is(&Value::from(json!({ "score": "7" }))));
    /// ```
    pub fn partial(&self) -> Self {
        let fields = self
            .fields
            .iter()
            .map(|(name, decoder)| {
                let decoder: Arc<dyn ValueDecoder> =
                    if decoder.decode_value(&Value::Undefined).is_success() {
                        Arc::clone(decoder)
                    } else {
                        Arc::new(UnionDecoder::optional(Arc::clone(decoder)))
                    };
                (name.clone(), decoder)
            })
            .collect();
        Self { fields }
    }
}

impl Decoder for RecordDecoder {
    type Output = IndexMap<String, Value>;

    fn decode(&self, input: &Value) -> DecodeResult<Self::Output> {
        let object = match input {
            Value::Object(object) => object,
            // Arrays are object-shaped, but a record only accepts plain objects
            Value::Array(_) => return fail(DecodeError::unexpected_prototype()),
            _ => return fail(DecodeError::unexpected_type("object")),
        };

        let mut report = ReportChildren::new();
        let mut decoded = IndexMap::with_capacity(self.fields.len());

        for (name, decoder) in &self.fields {
            if !object.contains_key(name) && decoder.decode_value(&Value::Undefined).is_failure() {
                report.insert(
                    LocationKey::field(name.as_str()),
                    ReportEntry::new(DecodeError::prop_missing()),
                );
            }
        }

        for (key, value) in object {
            if !self.fields.contains_key(key) {
                report.insert(
                    LocationKey::field(key.as_str()),
                    ReportEntry::with_given(value.clone(), DecodeError::prop_unknown()),
                );
            }
        }

        for (name, decoder) in &self.fields {
            let Some(value) = object.get(name) else {
                continue;
            };

            match decoder.decode_value(value) {
                Validation::Success(v) => {
                    decoded.insert(name.clone(), v);
                }
                Validation::Failure(field_report) => {
                    report.insert(
                        LocationKey::field(name.as_str()),
                        ReportEntry::with_given(value.clone(), field_report),
                    );
                }
            }
        }

        match DecodeReport::children(report) {
            Some(report) => fail(report),
            None => success(decoded),
        }
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.decode(input).map(Value::Object)
    }

    fn as_traversable(&self) -> Option<&dyn Traversable> {
        Some(self)
    }
}

impl Traversable for RecordDecoder {
    fn children(&self) -> Children {
        self.fields
            .iter()
            .map(|(name, decoder)| (LocationKey::field(name.as_str()), Arc::clone(decoder)))
            .collect()
    }
}
