//! Decoder definitions.
//!
//! This module provides the decoder types and the [`Decoders`] entry point for
//! building them. Decoders compose: records, dictionaries, unions and variants
//! are built from other decoders, and every failure found in one pass is
//! reported at its structural location.
//!
//! # Example
//!
//! ```rust
//! use schematist::{Decoder, Decoders, ErrorKind, Location, Value};
//! use serde_json::json;
//!
//! let decoder = Decoders::record()
//!     .field("name", Decoders::string())
//!     .field("score", Decoders::number());
//!
//! let report = decoder
//!     .decode(&Value::from(json!({ "name": "John" })))
//!     .into_result()
//!     .unwrap_err();
//!
//! let missing = report.at(&Location::root().push("score")).unwrap();
//! assert_eq!(missing.kind(), Some(ErrorKind::PropMissing));
//! ```

mod combinators;
mod dict;
mod lazy;
mod map;
mod primitive;
mod record;
mod traits;

use std::sync::Arc;

pub use combinators::{Tagged, UnionDecoder, VariantDecoder};
pub use dict::DictDecoder;
pub use lazy::LazyDecoder;
pub use map::Mapped;
pub use primitive::{
    BooleanDecoder, LiteralDecoder, NeverDecoder, NumberDecoder, StringDecoder, UndefinedDecoder,
    UnitDecoder, UnknownDecoder,
};
pub use record::RecordDecoder;
pub use traits::{erase, Children, Decoder, Traversable, ValueDecoder};

use crate::error::SchemaError;
use crate::value::Value;

/// Entry point for creating decoders.
///
/// `Decoders` provides one factory per decoder kind. Compound factories take
/// their inner decoders by value; lists of heterogeneous decoders are passed
/// as `Arc<dyn ValueDecoder>`, usually built with [`erase`].
pub struct Decoders;

impl Decoders {
    /// Accepts any input unchanged.
    pub fn unknown() -> UnknownDecoder {
        UnknownDecoder
    }

    /// Rejects every input.
    pub fn never() -> NeverDecoder {
        NeverDecoder
    }

    /// Accepts only `null`.
    pub fn unit() -> UnitDecoder {
        UnitDecoder
    }

    /// Accepts only `undefined`, the absent value.
    pub fn undef() -> UndefinedDecoder {
        UndefinedDecoder
    }

    pub fn string() -> StringDecoder {
        StringDecoder
    }

    pub fn number() -> NumberDecoder {
        NumberDecoder
    }

    pub fn boolean() -> BooleanDecoder {
        BooleanDecoder
    }

    /// Accepts only inputs equal to `literal`.
    pub fn literal(literal: impl Into<Value>) -> LiteralDecoder {
        LiteralDecoder::new(literal)
    }

    /// Creates a union of the given alternatives, tried in order.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::EmptyUnion` if `alternatives` is empty.
    pub fn union(alternatives: Vec<Arc<dyn ValueDecoder>>) -> Result<UnionDecoder, SchemaError> {
        UnionDecoder::new(alternatives)
    }

    /// Accepts whatever `decoder` accepts, or `undefined`.
    ///
    /// Record fields declared with `optional` may be left out of the input.
    pub fn optional<D: Decoder + 'static>(decoder: D) -> UnionDecoder {
        UnionDecoder::optional(erase(decoder))
    }

    /// Accepts whatever `decoder` accepts, or `null`.
    pub fn maybe<D: Decoder + 'static>(decoder: D) -> UnionDecoder {
        UnionDecoder::maybe(erase(decoder))
    }

    /// Creates a record decoder with no fields; add them with
    /// [`RecordDecoder::field`].
    pub fn record() -> RecordDecoder {
        RecordDecoder::new()
    }

    /// Creates a dictionary decoder whose every value is decoded by `entry`.
    pub fn dict<D: Decoder + 'static>(entry: D) -> DictDecoder<D> {
        DictDecoder::new(entry)
    }

    /// Creates a tagged union from `(tag, decoder)` pairs, tried in order.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::EmptyVariant` if no alternative is given, and
    /// `SchemaError::DuplicateField` if a tag is repeated.
    pub fn variant<K>(alternatives: Vec<(K, Arc<dyn ValueDecoder>)>) -> Result<VariantDecoder, SchemaError>
    where
        K: Into<String>,
    {
        VariantDecoder::new(alternatives)
    }

    /// Defers building a decoder until it is first used.
    ///
    /// This is how a decoder refers to itself; see [`LazyDecoder`].
    pub fn lazy<D, F>(supplier: F) -> LazyDecoder<D>
    where
        D: Decoder,
        F: Fn() -> D + Send + Sync + 'static,
    {
        LazyDecoder::new(supplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_factories_build_working_decoders() {
        assert!(Decoders::unknown().is(&Value::Undefined));
        assert!(!Decoders::never().is(&Value::Null));
        assert!(Decoders::unit().is(&Value::Null));
        assert!(Decoders::undef().is(&Value::Undefined));
        assert!(Decoders::string().is(&Value::from("s")));
        assert!(Decoders::number().is(&Value::from(1.0)));
        assert!(Decoders::boolean().is(&Value::from(false)));
        assert!(Decoders::literal("on").is(&Value::from("on")));
    }

    #[test]
    fn test_compound_factories() {
        let decoder = Decoders::record()
            .field("tags", Decoders::dict(Decoders::boolean()))
            .field("note", Decoders::maybe(Decoders::string()))
            .field("id", Decoders::optional(Decoders::number()));

        assert!(decoder.is(&Value::from(json!({ "tags": { "a": true }, "note": null }))));
        assert!(!decoder.is(&Value::from(json!({ "tags": { "a": 1 }, "note": null }))));
    }

    #[test]
    fn test_union_factory_rejects_empty() {
        assert_eq!(Decoders::union(vec![]).err(), Some(SchemaError::EmptyUnion));
    }
}
