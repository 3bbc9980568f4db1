//! Output adaptation.
//!
//! [`Mapped`] decodes with an inner decoder and then passes the typed result
//! through a function. This is how decoded structures are turned into richer
//! domain objects without touching the validation rules.

use crate::result::DecodeResult;
use crate::value::Value;

use super::traits::{Decoder, Traversable};

/// A decoder that adapts the output of another decoder.
///
/// Created by [`Decoder::map`].
///
/// # Example
///
/// ```rust
/// use schematist::{Decoder, Decoders, Value};
/// use serde_json::json;
///
/// struct User {
///     name: String,
/// }
///
/// let decoder = Decoders::record()
///     .field("name", Decoders::string())
///     .map(|fields| User {
///         name: fields["name"].as_str().unwrap_or_default().to_string(),
///     });
///
/// let user = decoder
///     .decode(&Value::from(json!({ "name": "Alice" })))
///     .into_result()
///     .unwrap();
/// assert_eq!(user.name, "Alice");
/// ```
pub struct Mapped<D, F> {
    inner: D,
    f: F,
}

impl<D, F> Mapped<D, F> {
    pub(crate) fn new(inner: D, f: F) -> Self {
        Self { inner, f }
    }
}

impl<D, F, B> Decoder for Mapped<D, F>
where
    D: Decoder,
    F: Fn(D::Output) -> B + Send + Sync,
{
    type Output = B;

    fn decode(&self, input: &Value) -> DecodeResult<B> {
        self.inner.decode(input).map(|decoded| (self.f)(decoded))
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.inner.decode_to_value(input)
    }

    fn as_traversable(&self) -> Option<&dyn Traversable> {
        self.inner.as_traversable()
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        self.inner.collect_refs(refs)
    }
}
