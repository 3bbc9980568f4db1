//! Decode results.
//!
//! A decode either succeeds with a value or fails with a [`DecodeReport`].
//! Results are stillwater [`Validation`]s, so `map` transforms a success and
//! passes a failure through unchanged, and `and_then` sequences a dependent
//! decode.
//!
//! # Example
//!
//! ```rust
//! use schematist::{fail, success, DecodeError, DecodeResult};
//!
//! let ok: DecodeResult<i32> = success(20);
//! assert_eq!(ok.map(|n| n * 2).into_result().unwrap(), 40);
//!
//! let err: DecodeResult<i32> = fail(DecodeError::never());
//! assert!(err.map(|n| n * 2).is_failure());
//! ```

use stillwater::Validation;

use crate::error::DecodeReport;

/// The outcome of a decode: `Validation::Success` or `Validation::Failure`.
pub type DecodeResult<A> = Validation<A, DecodeReport>;

/// Wraps a decoded value in a successful result.
pub fn success<A>(value: A) -> DecodeResult<A> {
    Validation::Success(value)
}

/// Wraps a report (or a single error) in a failed result.
pub fn fail<A>(report: impl Into<DecodeReport>) -> DecodeResult<A> {
    Validation::Failure(report.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeError, ErrorKind};

    #[test]
    fn test_map_passes_failure_through() {
        let result: DecodeResult<i32> = fail(DecodeError::prop_missing());
        let mapped = result.map(|n| n + 1);
        match mapped {
            Validation::Failure(report) => assert_eq!(report.kind(), Some(ErrorKind::PropMissing)),
            Validation::Success(_) => panic!("expected failure"),
        }
    }

    #[test]
    fn test_and_then_sequences_on_success() {
        let result: DecodeResult<i32> = success(2);
        let chained = result.and_then(|n| -> DecodeResult<i32> {
            if n > 1 {
                success(n * 10)
            } else {
                fail(DecodeError::never())
            }
        });
        assert_eq!(chained.into_result().unwrap(), 20);
    }

    #[test]
    fn test_and_then_skips_on_failure() {
        let result: DecodeResult<i32> = fail(DecodeError::never());
        let chained = result.and_then(|_| -> DecodeResult<i32> { panic!("must not run") });
        assert!(chained.is_failure());
    }
}
