//! Text rendering of flattened reports.

use crate::error::DecodeReport;

use super::flatten::{flatten, FlattenedReport};

/// Renders one line per entry, `Error at <location>: <kind>`, joined by
/// newlines.
///
/// The root location renders as the empty string.
pub fn format(report: &FlattenedReport) -> String {
    report
        .iter()
        .map(|(location, entry)| format!("Error at {}: {}", location, entry.error.kind))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Flattens and renders a report in one step.
pub fn to_text(report: &DecodeReport) -> String {
    format(&flatten(report))
}
