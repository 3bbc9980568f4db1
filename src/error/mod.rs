//! Error types for decode failures and invalid decoder definitions.
//!
//! This module provides the report model ([`DecodeReport`], [`DecodeError`])
//! returned by failed decodes, and [`SchemaError`] for construction-time
//! programmer errors.

mod report;
mod schema_error;

pub use report::{DecodeError, DecodeReport, ErrorKind, ReportChildren, ReportEntry, ReportMap};
pub use schema_error::SchemaError;
