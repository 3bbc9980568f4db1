//! Decode failure reports.
//!
//! This module provides [`DecodeError`] for a single leaf failure and
//! [`DecodeReport`], the recursive tree that maps structural locations to the
//! failures found beneath them.

use std::fmt::{self, Display};
use std::ops::Deref;

use indexmap::IndexMap;

use crate::path::{Location, LocationKey};
use crate::value::Value;

/// The kind of a leaf decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input has the wrong runtime type.
    UnexpectedType,
    /// A record field is absent from the input.
    PropMissing,
    /// The input has a key the record does not declare.
    PropUnknown,
    /// No alternative of a union or variant accepted the input.
    NoneValid,
    /// The `never` decoder was reached.
    Never,
    /// The input is object-shaped but not a plain object.
    UnexpectedPrototype,
    /// A named reference could not be resolved.
    UnresolvedReference,
}

impl ErrorKind {
    /// Returns the kebab-case tag of this kind (e.g. `prop-missing`).
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnexpectedType => "unexpected-type",
            ErrorKind::PropMissing => "prop-missing",
            ErrorKind::PropUnknown => "prop-unknown",
            ErrorKind::NoneValid => "none-valid",
            ErrorKind::Never => "never",
            ErrorKind::UnexpectedPrototype => "unexpected-prototype",
            ErrorKind::UnresolvedReference => "unresolved-reference",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single leaf failure.
///
/// - **kind**: what went wrong
/// - **expected**: a short description of what was expected (optional)
/// - **attempts**: the per-alternative reports of a `none-valid` failure
///
/// # Example
///
/// ```rust
/// use schematist::{DecodeError, ErrorKind};
///
/// let error = DecodeError::unexpected_type("string");
/// assert_eq!(error.kind, ErrorKind::UnexpectedType);
/// assert_eq!(error.expected.as_deref(), Some("string"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    pub kind: ErrorKind,
    pub expected: Option<String>,
    pub attempts: Option<ReportChildren>,
}

impl DecodeError {
    /// Creates a new error of the given kind with no context.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            expected: None,
            attempts: None,
        }
    }

    pub fn unexpected_type(expected: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnexpectedType).with_expected(expected)
    }

    pub fn unexpected_prototype() -> Self {
        Self::new(ErrorKind::UnexpectedPrototype).with_expected("plain object")
    }

    pub fn prop_missing() -> Self {
        Self::new(ErrorKind::PropMissing)
    }

    pub fn prop_unknown() -> Self {
        Self::new(ErrorKind::PropUnknown)
    }

    pub fn never() -> Self {
        Self::new(ErrorKind::Never)
    }

    /// Creates a `none-valid` error carrying the report of every attempted alternative.
    pub fn none_valid(attempts: ReportChildren) -> Self {
        Self {
            kind: ErrorKind::NoneValid,
            expected: None,
            attempts: Some(attempts),
        }
    }

    pub fn unresolved_reference(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvedReference).with_expected(name)
    }

    /// Sets the "expected" description and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        Ok(())
    }
}

/// One child of a report mapping: the input found at that location (if
/// recorded) and the report for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub given: Option<Value>,
    pub report: DecodeReport,
}

impl ReportEntry {
    pub fn new(report: impl Into<DecodeReport>) -> Self {
        Self {
            given: None,
            report: report.into(),
        }
    }

    pub fn with_given(given: Value, report: impl Into<DecodeReport>) -> Self {
        Self {
            given: Some(given),
            report: report.into(),
        }
    }
}

/// Child reports keyed by location, in the order they were recorded.
pub type ReportChildren = IndexMap<LocationKey, ReportEntry>;

/// A structured decode failure.
///
/// A report is either a single [`DecodeError`] leaf, or a non-empty mapping
/// from location keys to child reports. Every child of a mapping holds at
/// least one real failure somewhere beneath it.
///
/// # Example
///
/// ```rust
/// use schematist::{Decoder, Decoders, ErrorKind, Location, Value};
/// use serde_json::json;
///
/// let decoder = Decoders::record()
///     .field("name", Decoders::string())
///     .field("score", Decoders::number());
///
/// let report = decoder
///     .decode(&Value::from(json!({ "name": "John" })))
///     .into_result()
///     .unwrap_err();
///
/// let missing = report.at(&Location::root().push("score")).unwrap();
/// assert_eq!(missing.kind(), Some(ErrorKind::PropMissing));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeReport {
    Leaf(DecodeError),
    Children(ReportMap),
}

/// The non-empty child mapping of a [`DecodeReport`].
///
/// Only [`DecodeReport::children`] builds one, so a mapping report always
/// holds at least one entry. Read access goes through `Deref` to
/// [`ReportChildren`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMap(ReportChildren);

impl ReportMap {
    /// Converts into the underlying mapping.
    pub fn into_inner(self) -> ReportChildren {
        self.0
    }
}

impl Deref for ReportMap {
    type Target = ReportChildren;

    fn deref(&self) -> &ReportChildren {
        &self.0
    }
}

impl<'a> IntoIterator for &'a ReportMap {
    type Item = (&'a LocationKey, &'a ReportEntry);
    type IntoIter = indexmap::map::Iter<'a, LocationKey, ReportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl DecodeReport {
    pub fn leaf(error: DecodeError) -> Self {
        DecodeReport::Leaf(error)
    }

    /// Wraps a mapping of child reports.
    ///
    /// Returns `None` when the mapping is empty, since an empty mapping does
    /// not describe any failure.
    pub fn children(children: ReportChildren) -> Option<Self> {
        if children.is_empty() {
            None
        } else {
            Some(DecodeReport::Children(ReportMap(children)))
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, DecodeReport::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&DecodeError> {
        match self {
            DecodeReport::Leaf(error) => Some(error),
            DecodeReport::Children(_) => None,
        }
    }

    pub fn as_children(&self) -> Option<&ReportChildren> {
        match self {
            DecodeReport::Leaf(_) => None,
            DecodeReport::Children(children) => Some(&children.0),
        }
    }

    /// Returns the kind of a leaf report, or None for a mapping.
    pub fn kind(&self) -> Option<ErrorKind> {
        self.as_leaf().map(|error| error.kind)
    }

    /// Returns the child entry stored under `key`.
    ///
    /// For a `none-valid` leaf this looks into the recorded attempts.
    pub fn get(&self, key: &LocationKey) -> Option<&ReportEntry> {
        match self {
            DecodeReport::Children(children) => children.get(key),
            DecodeReport::Leaf(error) => error.attempts.as_ref().and_then(|a| a.get(key)),
        }
    }

    /// Navigates to the report at `location`, relative to this report.
    pub fn at(&self, location: &Location) -> Option<&DecodeReport> {
        location
            .keys()
            .try_fold(self, |report, key| report.get(key).map(|entry| &entry.report))
    }
}

impl From<DecodeError> for DecodeReport {
    fn from(error: DecodeError) -> Self {
        DecodeReport::Leaf(error)
    }
}

impl Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::report::to_text(self))
    }
}

impl std::error::Error for DecodeReport {}

// Reports are handed across threads by batch decoding.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<DecodeReport>();
    assert_sync::<DecodeReport>();
};
