//! Deferred decoders for self-referential schemas.

use std::sync::OnceLock;

use crate::result::DecodeResult;
use crate::value::Value;

use super::traits::Decoder;

type Supplier<D> = Box<dyn Fn() -> D + Send + Sync>;

/// A decoder built on first use.
///
/// The supplier runs at most once, the first time the decoder decodes
/// something. This breaks the construction-time cycle of recursive schemas:
/// each level of nesting is only built when the input actually reaches it.
///
/// Lazy decoders are opaque to traversal.
///
/// # Example
///
/// ```rust
/// use schematist::{Decoder, Decoders, RecordDecoder, Value};
/// use serde_json::json;
///
/// fn tree() -> RecordDecoder {
///     Decoders::record()
///         .field("label", Decoders::string())
///         .field("children", Decoders::dict(Decoders::lazy(tree)))
/// }
///
/// let input = Value::from(json!({
///     "label": "root",
///     "children": { "a": { "label": "leaf", "children": {} } }
/// }));
/// assert!(tree().is(&input));
/// ```
pub struct LazyDecoder<D> {
    supplier: Supplier<D>,
    decoder: OnceLock<D>,
}

impl<D: Decoder> LazyDecoder<D> {
    pub fn new<F>(supplier: F) -> Self
    where
        F: Fn() -> D + Send + Sync + 'static,
    {
        Self {
            supplier: Box::new(supplier),
            decoder: OnceLock::new(),
        }
    }

    /// Returns true once the supplier has run.
    pub fn is_forced(&self) -> bool {
        self.decoder.get().is_some()
    }

    fn force(&self) -> &D {
        self.decoder.get_or_init(|| {
            tracing::trace!("building deferred decoder");
            (self.supplier)()
        })
    }
}

impl<D: Decoder> Decoder for LazyDecoder<D> {
    type Output = D::Output;

    fn decode(&self, input: &Value) -> DecodeResult<D::Output> {
        self.force().decode(input)
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.force().decode_to_value(input)
    }

    fn collect_refs(&self, _refs: &mut Vec<String>) {}
}
