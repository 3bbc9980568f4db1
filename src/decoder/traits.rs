//! Traits for decoder polymorphism.
//!
//! This module provides the [`Decoder`] trait implemented by every decoder,
//! [`Traversable`] for compound decoders that expose their children, and the
//! type-erased [`ValueDecoder`] that lets decoders with different output types
//! be composed together.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::path::LocationKey;
use crate::result::DecodeResult;
use crate::value::Value;

use super::map::Mapped;

/// The immediate children of a compound decoder, keyed by location.
pub type Children = IndexMap<LocationKey, Arc<dyn ValueDecoder>>;

/// A decoder turns an untyped [`Value`] into a typed value or a report.
///
/// Decoders are immutable and hold no per-call state, so one decoder can be
/// reused for any number of inputs and shared across threads.
///
/// # Example
///
/// ```rust
/// use schematist::{Decoder, Decoders, Value};
///
/// let decoder = Decoders::string();
///
/// let result = decoder.decode(&Value::from("hello"));
/// assert_eq!(result.into_result().unwrap(), "hello");
///
/// assert!(!decoder.is(&Value::from(42.0)));
/// ```
pub trait Decoder: Send + Sync {
    /// The typed value produced by a successful decode.
    type Output;

    /// Decodes `input`, returning the typed value or a report.
    fn decode(&self, input: &Value) -> DecodeResult<Self::Output>;

    /// Decodes `input` and returns the structural form of the result.
    ///
    /// This lets decoders with different output types be used uniformly
    /// inside records, unions and registries.
    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value>;

    /// Returns this decoder's structural view if it is a compound decoder.
    fn as_traversable(&self) -> Option<&dyn Traversable> {
        None
    }

    /// Collects the names of registry references reachable from this decoder.
    fn collect_refs(&self, refs: &mut Vec<String>) {
        if let Some(node) = self.as_traversable() {
            for child in node.children().values() {
                child.collect_value_refs(refs);
            }
        }
    }

    /// Returns true if `input` decodes successfully.
    fn is(&self, input: &Value) -> bool {
        self.decode(input).is_success()
    }

    /// Adapts the typed output with `f`, e.g. to construct a domain object.
    ///
    /// The structural form returned by `decode_to_value` is unchanged.
    fn map<B, F>(self, f: F) -> Mapped<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> B + Send + Sync,
    {
        Mapped::new(self, f)
    }
}

/// A compound decoder whose immediate children can be inspected statically,
/// independent of any input.
pub trait Traversable {
    fn children(&self) -> Children;
}

/// A type-erased decoder producing structural values.
///
/// Every [`Decoder`] is a `ValueDecoder`, so heterogeneous decoders can be
/// stored together as `Arc<dyn ValueDecoder>`.
///
/// # Example
///
/// ```rust
/// use schematist::{erase, Decoders, ValueDecoder};
/// use std::sync::Arc;
///
/// let decoders: Vec<Arc<dyn ValueDecoder>> = vec![
///     erase(Decoders::string()),
///     erase(Decoders::number()),
/// ];
/// ```
pub trait ValueDecoder: Send + Sync {
    fn decode_value(&self, input: &Value) -> DecodeResult<Value>;

    fn traversable(&self) -> Option<&dyn Traversable>;

    fn collect_value_refs(&self, refs: &mut Vec<String>);
}

impl<D: Decoder> ValueDecoder for D {
    fn decode_value(&self, input: &Value) -> DecodeResult<Value> {
        self.decode_to_value(input)
    }

    fn traversable(&self) -> Option<&dyn Traversable> {
        self.as_traversable()
    }

    fn collect_value_refs(&self, refs: &mut Vec<String>) {
        self.collect_refs(refs)
    }
}

impl Decoder for Arc<dyn ValueDecoder> {
    type Output = Value;

    fn decode(&self, input: &Value) -> DecodeResult<Value> {
        (**self).decode_value(input)
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        (**self).decode_value(input)
    }

    fn as_traversable(&self) -> Option<&dyn Traversable> {
        (**self).traversable()
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        (**self).collect_value_refs(refs)
    }
}

/// Erases a decoder's output type so it can be stored alongside others.
pub fn erase<D: Decoder + 'static>(decoder: D) -> Arc<dyn ValueDecoder> {
    Arc::new(decoder)
}
