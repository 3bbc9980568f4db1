//! Decoder combinators for alternatives.
//!
//! This module provides combinators that try several decoders in turn:
//! - `union`: the first alternative (in declaration order) that accepts the input wins
//! - `optional`: the inner decoder, falling back to `undefined`
//! - `maybe`: the inner decoder, falling back to `null`
//! - `variant`: like `union`, but the winning alternative's tag is kept in the output
//!
//! # Example
//!
//! ```rust
//! use schematist::{erase, Decoder, Decoders, ErrorKind, Value};
//!
//! let id = Decoders::union(vec![
//!     erase(Decoders::string()),
//!     erase(Decoders::number()),
//! ])
//! .unwrap();
//!
//! assert!(id.is(&Value::from("abc")));
//! assert!(id.is(&Value::from(42.0)));
//!
//! let report = id.decode(&Value::Null).into_result().unwrap_err();
//! assert_eq!(report.kind(), Some(ErrorKind::NoneValid));
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use stillwater::prelude::{NonEmptyVec, Semigroup};
use stillwater::Validation;

use crate::error::{DecodeError, ReportChildren, ReportEntry, SchemaError};
use crate::path::LocationKey;
use crate::result::{fail, success, DecodeResult};
use crate::value::Value;

use super::primitive::{UndefinedDecoder, UnitDecoder};
use super::traits::{Children, Decoder, Traversable, ValueDecoder};

/// Tries each alternative in declaration order and returns the first success.
///
/// When every alternative fails, the result is a `none-valid` error whose
/// attempts map each alternative's index to its report. Order matters: an
/// earlier alternative is preferred whenever several would accept the input.
#[derive(Clone)]
pub struct UnionDecoder {
    alternatives: NonEmptyVec<Arc<dyn ValueDecoder>>,
}

impl UnionDecoder {
    /// Creates a union from a list of alternatives.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::EmptyUnion` if `alternatives` is empty.
    pub fn new(alternatives: Vec<Arc<dyn ValueDecoder>>) -> Result<Self, SchemaError> {
        NonEmptyVec::from_vec(alternatives)
            .map(Self::from_non_empty)
            .ok_or(SchemaError::EmptyUnion)
    }

    /// Creates a union from a list that is statically known to be non-empty.
    pub fn from_non_empty(alternatives: NonEmptyVec<Arc<dyn ValueDecoder>>) -> Self {
        Self { alternatives }
    }

    /// The union of `decoder` and `undefined`, with `decoder` tried first.
    pub fn optional(decoder: Arc<dyn ValueDecoder>) -> Self {
        Self::with_fallback(decoder, Arc::new(UndefinedDecoder))
    }

    /// The union of `decoder` and `null`, with `decoder` tried first.
    pub fn maybe(decoder: Arc<dyn ValueDecoder>) -> Self {
        Self::with_fallback(decoder, Arc::new(UnitDecoder))
    }

    fn with_fallback(primary: Arc<dyn ValueDecoder>, fallback: Arc<dyn ValueDecoder>) -> Self {
        Self {
            alternatives: NonEmptyVec::singleton(primary).combine(NonEmptyVec::singleton(fallback)),
        }
    }

    pub fn len(&self) -> usize {
        self.alternatives.len()
    }

    /// Returns false since a union always has at least one alternative.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the alternatives in the order they are tried.
    pub fn alternatives(&self) -> &NonEmptyVec<Arc<dyn ValueDecoder>> {
        &self.alternatives
    }
}

impl Decoder for UnionDecoder {
    type Output = Value;

    fn decode(&self, input: &Value) -> DecodeResult<Value> {
        let mut attempts = ReportChildren::new();

        for (index, alternative) in self.alternatives.iter().enumerate() {
            match alternative.decode_value(input) {
                Validation::Success(value) => return success(value),
                Validation::Failure(report) => {
                    attempts.insert(LocationKey::Index(index), ReportEntry::new(report));
                }
            }
        }

        fail(DecodeError::none_valid(attempts))
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.decode(input)
    }

    fn as_traversable(&self) -> Option<&dyn Traversable> {
        Some(self)
    }
}

impl Traversable for UnionDecoder {
    fn children(&self) -> Children {
        self.alternatives
            .iter()
            .enumerate()
            .map(|(index, alternative)| (LocationKey::Index(index), Arc::clone(alternative)))
            .collect()
    }
}

/// The output of a [`VariantDecoder`]: the winning tag and its decoded value.
#[derive(Debug, Clone, PartialEq)]
pub struct Tagged {
    pub tag: String,
    pub value: Value,
}

impl Tagged {
    /// Converts into the single-key object form `{ tag: value }`.
    pub fn into_value(self) -> Value {
        let mut map = IndexMap::with_capacity(1);
        map.insert(self.tag, self.value);
        Value::Object(map)
    }
}

/// A tagged union: tries named alternatives in declaration order and keeps
/// the name of the first one that accepts the input.
///
/// # Example
///
/// ```rust
/// use schematist::{erase, Decoder, Decoders, Value};
///
/// let shape = Decoders::variant(vec![
///     ("radius", erase(Decoders::number())),
///     ("label", erase(Decoders::string())),
/// ])
/// .unwrap();
///
/// let tagged = shape.decode(&Value::from(2.5)).into_result().unwrap();
/// assert_eq!(tagged.tag, "radius");
/// assert_eq!(tagged.value, Value::from(2.5));
/// ```
#[derive(Clone)]
pub struct VariantDecoder {
    alternatives: IndexMap<String, Arc<dyn ValueDecoder>>,
}

impl VariantDecoder {
    /// Creates a variant from `(tag, decoder)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::EmptyVariant` if no alternative is given, and
    /// `SchemaError::DuplicateField` if a tag is repeated.
    pub fn new<K>(alternatives: Vec<(K, Arc<dyn ValueDecoder>)>) -> Result<Self, SchemaError>
    where
        K: Into<String>,
    {
        if alternatives.is_empty() {
            return Err(SchemaError::EmptyVariant);
        }

        let mut map = IndexMap::with_capacity(alternatives.len());
        for (tag, decoder) in alternatives {
            let tag = tag.into();
            if map.contains_key(&tag) {
                return Err(SchemaError::DuplicateField(tag));
            }
            map.insert(tag, decoder);
        }

        Ok(Self { alternatives: map })
    }

    /// Returns the declared tags in order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.alternatives.keys().map(String::as_str)
    }
}

impl Decoder for VariantDecoder {
    type Output = Tagged;

    fn decode(&self, input: &Value) -> DecodeResult<Tagged> {
        let mut attempts = ReportChildren::new();

        for (tag, alternative) in &self.alternatives {
            match alternative.decode_value(input) {
                Validation::Success(value) => {
                    return success(Tagged {
                        tag: tag.clone(),
                        value,
                    })
                }
                Validation::Failure(report) => {
                    attempts.insert(LocationKey::field(tag.as_str()), ReportEntry::new(report));
                }
            }
        }

        fail(DecodeError::none_valid(attempts))
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.decode(input).map(Tagged::into_value)
    }

    fn as_traversable(&self) -> Option<&dyn Traversable> {
        Some(self)
    }
}

impl Traversable for VariantDecoder {
    fn children(&self) -> Children {
        self.alternatives
            .iter()
            .map(|(tag, alternative)| (LocationKey::field(tag.as_str()), Arc::clone(alternative)))
            .collect()
    }
}
