//! Parallel decoding of many inputs.

use rayon::prelude::*;

use crate::decoder::Decoder;
use crate::result::DecodeResult;
use crate::value::Value;

/// Decodes every input with `decoder`, in parallel.
///
/// Results are returned in input order. Each input is decoded independently,
/// so one failing input does not affect the others.
///
/// # Example
///
/// ```rust
/// use schematist::{decode_batch, Decoders, Value};
///
/// let inputs = vec![Value::from(1.0), Value::from("two"), Value::from(3.0)];
/// let results = decode_batch(&Decoders::number(), &inputs);
///
/// let ok: Vec<bool> = results.iter().map(|r| r.is_success()).collect();
/// assert_eq!(ok, vec![true, false, true]);
/// ```
pub fn decode_batch<D>(decoder: &D, inputs: &[Value]) -> Vec<DecodeResult<D::Output>>
where
    D: Decoder + ?Sized,
    D::Output: Send,
{
    inputs.par_iter().map(|input| decoder.decode(input)).collect()
}
