//! Primitive decoders.
//!
//! Each primitive decoder checks a single predicate on the input and fails
//! with one fixed leaf error. Primitive decoders never produce report mappings.

use std::convert::Infallible;

use crate::error::DecodeError;
use crate::result::{fail, success, DecodeResult};
use crate::value::Value;

use super::traits::Decoder;

/// Accepts any input and returns it unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownDecoder;

impl Decoder for UnknownDecoder {
    type Output = Value;

    fn decode(&self, input: &Value) -> DecodeResult<Value> {
        success(input.clone())
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.decode(input)
    }
}

/// Rejects every input with a `never` error.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverDecoder;

impl Decoder for NeverDecoder {
    type Output = Infallible;

    fn decode(&self, _input: &Value) -> DecodeResult<Infallible> {
        fail(DecodeError::never())
    }

    fn decode_to_value(&self, _input: &Value) -> DecodeResult<Value> {
        fail(DecodeError::never())
    }
}

/// Accepts only `null`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitDecoder;

impl Decoder for UnitDecoder {
    type Output = ();

    fn decode(&self, input: &Value) -> DecodeResult<()> {
        match input {
            Value::Null => success(()),
            _ => fail(DecodeError::unexpected_type("null")),
        }
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.decode(input).map(|()| Value::Null)
    }
}

/// Accepts only the absent value ([`Value::Undefined`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct UndefinedDecoder;

impl Decoder for UndefinedDecoder {
    type Output = ();

    fn decode(&self, input: &Value) -> DecodeResult<()> {
        match input {
            Value::Undefined => success(()),
            _ => fail(DecodeError::unexpected_type("undefined")),
        }
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.decode(input).map(|()| Value::Undefined)
    }
}

/// Accepts any string.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringDecoder;

impl Decoder for StringDecoder {
    type Output = String;

    fn decode(&self, input: &Value) -> DecodeResult<String> {
        match input {
            Value::String(s) => success(s.clone()),
            _ => fail(DecodeError::unexpected_type("string")),
        }
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.decode(input).map(Value::String)
    }
}

/// Accepts any number, including NaN and the infinities.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberDecoder;

impl Decoder for NumberDecoder {
    type Output = f64;

    fn decode(&self, input: &Value) -> DecodeResult<f64> {
        match input {
            Value::Number(n) => success(*n),
            _ => fail(DecodeError::unexpected_type("number")),
        }
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.decode(input).map(Value::Number)
    }
}

/// Accepts `true` and `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanDecoder;

impl Decoder for BooleanDecoder {
    type Output = bool;

    fn decode(&self, input: &Value) -> DecodeResult<bool> {
        match input {
            Value::Bool(b) => success(*b),
            _ => fail(DecodeError::unexpected_type("boolean")),
        }
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.decode(input).map(Value::Bool)
    }
}

/// Accepts only inputs equal to a fixed literal.
///
/// Equality is structural with IEEE-754 number comparison, so a NaN literal
/// matches nothing.
///
/// # Example
///
/// ```rust
/// use schematist::{Decoder, Decoders, Value};
///
/// let decoder = Decoders::literal("admin");
/// assert!(decoder.is(&Value::from("admin")));
/// assert!(!decoder.is(&Value::from("user")));
///
/// let nan = Decoders::literal(f64::NAN);
/// assert!(!nan.is(&Value::from(f64::NAN)));
/// ```
#[derive(Debug, Clone)]
pub struct LiteralDecoder {
    literal: Value,
}

impl LiteralDecoder {
    pub fn new(literal: impl Into<Value>) -> Self {
        Self {
            literal: literal.into(),
        }
    }

    /// Returns the literal this decoder accepts.
    pub fn literal(&self) -> &Value {
        &self.literal
    }
}

impl Decoder for LiteralDecoder {
    type Output = Value;

    fn decode(&self, input: &Value) -> DecodeResult<Value> {
        if *input == self.literal {
            success(self.literal.clone())
        } else {
            fail(DecodeError::unexpected_type(self.literal.to_string()))
        }
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.decode(input)
    }
}
