//! Presenting decode reports.
//!
//! A [`DecodeReport`](crate::DecodeReport) mirrors the nesting of the decoder
//! that produced it. This module reduces it to a flat mapping from full
//! locations to leaf errors ([`flatten`]) and renders that mapping as text
//! ([`format`]).
//!
//! # Example
//!
//! ```rust
//! use schematist::{flatten, format, Decoder, Decoders, Value};
//! use serde_json::json;
//!
//! let decoder = Decoders::record()
//!     .field("users", Decoders::dict(Decoders::record().field("role", Decoders::string())));
//!
//! let report = decoder
//!     .decode(&Value::from(json!({ "users": { "bob": { "role": 7 } } })))
//!     .into_result()
//!     .unwrap_err();
//!
//! assert_eq!(format(&flatten(&report)), "Error at users.bob.role: unexpected-type");
//! ```

mod flatten;
mod text;

pub use flatten::{flatten, FlatEntry, FlattenedReport};
pub use text::{format, to_text};
