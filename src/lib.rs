//! # Schematist
//!
//! Composable decoders that turn untyped values into typed data, or into a
//! structured report of everything that is wrong with the input.
//!
//! ## Overview
//!
//! A decoder is built once from smaller decoders (strings, numbers, records,
//! dictionaries, unions, ...) and can then decode any number of inputs. A
//! failed decode does not stop at the first problem: compound decoders report
//! every failing child under its structural key, so one call surfaces all
//! independent failures. Reports can be navigated by [`Location`], flattened
//! into `location -> error` pairs, and rendered as text.
//!
//! ## Core Types
//!
//! - [`Value`]: the untyped input model (the JSON data model plus `undefined`)
//! - [`Decoder`]: the decoding capability, with a typed `Output`
//! - [`Decoders`]: entry point for creating decoders
//! - [`DecodeReport`]: a leaf [`DecodeError`] or a mapping of child reports
//! - [`DecoderRegistry`]: named decoders and references for recursive schemas
//!
//! ## Example
//!
//! ```rust
//! use schematist::{flatten, format, Decoder, Decoders, Value};
//! use serde_json::json;
//!
//! let decoder = Decoders::record()
//!     .field("name", Decoders::string())
//!     .field("score", Decoders::number());
//!
//! let result = decoder.decode(&Value::from(json!({ "name": "John", "score": 42 })));
//! assert!(result.is_success());
//!
//! let report = decoder
//!     .decode(&Value::from(json!({ "name": 1, "extra": true })))
//!     .into_result()
//!     .unwrap_err();
//!
//! assert_eq!(
//!     format(&flatten(&report)),
//!     "Error at score: prop-missing\n\
//!      Error at extra: prop-unknown\n\
//!      Error at name: unexpected-type"
//! );
//! ```

pub mod batch;
pub mod decoder;
pub mod error;
pub mod path;
pub mod registry;
pub mod report;
pub mod result;
pub mod traverse;
pub mod value;

pub use batch::decode_batch;
pub use decoder::{
    erase, BooleanDecoder, Children, Decoder, Decoders, DictDecoder, LazyDecoder, LiteralDecoder,
    Mapped, NeverDecoder, NumberDecoder, RecordDecoder, StringDecoder, Tagged, Traversable,
    UndefinedDecoder, UnionDecoder, UnitDecoder, UnknownDecoder, ValueDecoder, VariantDecoder,
};
pub use error::{
    DecodeError, DecodeReport, ErrorKind, ReportChildren, ReportEntry, ReportMap, SchemaError,
};
pub use path::{Location, LocationKey};
pub use registry::{DecoderRegistry, RefDecoder, RegistryError};
pub use report::{flatten, format, FlatEntry, FlattenedReport};
pub use result::{fail, success, DecodeResult};
pub use traverse::{locate, traverse};
pub use value::{Value, ValueError};
