//! Flattening of nested reports.

use indexmap::IndexMap;

use crate::error::{DecodeError, DecodeReport};
use crate::path::Location;
use crate::value::Value;

/// One leaf failure of a flattened report.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatEntry {
    /// The input value found at the location, when the parent recorded it.
    pub given: Option<Value>,
    pub error: DecodeError,
}

/// A mapping from full locations to leaf errors.
///
/// Entries keep the order in which the decoders reported them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FlattenedReport {
    entries: IndexMap<Location, FlatEntry>,
}

impl FlattenedReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at exactly `location`.
    pub fn get(&self, location: &Location) -> Option<&FlatEntry> {
        self.entries.get(location)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Location, &FlatEntry)> {
        self.entries.iter()
    }

    /// Returns the locations in report order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.entries.keys()
    }
}

impl IntoIterator for FlattenedReport {
    type Item = (Location, FlatEntry);
    type IntoIter = indexmap::map::IntoIter<Location, FlatEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FlattenedReport {
    type Item = (&'a Location, &'a FlatEntry);
    type IntoIter = indexmap::map::Iter<'a, Location, FlatEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Reduces a nested report to a flat mapping from locations to leaf errors.
///
/// A leaf report becomes a single entry at the root location. A mapping is
/// flattened child by child, with every child location prefixed by the
/// child's own key. `none-valid` errors are leaves: their attempts stay
/// inside the error.
///
/// # Example
///
/// ```rust
/// use schematist::{flatten, DecodeError, DecodeReport, ErrorKind, Location};
///
/// let report = DecodeReport::leaf(DecodeError::never());
/// let flat = flatten(&report);
///
/// assert_eq!(flat.len(), 1);
/// assert_eq!(flat.get(&Location::root()).unwrap().error.kind, ErrorKind::Never);
/// ```
pub fn flatten(report: &DecodeReport) -> FlattenedReport {
    let mut entries = IndexMap::new();
    collect(report, &Location::root(), None, &mut entries);
    FlattenedReport { entries }
}

fn collect(
    report: &DecodeReport,
    location: &Location,
    given: Option<&Value>,
    entries: &mut IndexMap<Location, FlatEntry>,
) {
    match report {
        DecodeReport::Leaf(error) => {
            entries.insert(
                location.clone(),
                FlatEntry {
                    given: given.cloned(),
                    error: error.clone(),
                },
            );
        }
        DecodeReport::Children(children) => {
            for (key, entry) in children {
                collect(
                    &entry.report,
                    &location.push(key.clone()),
                    entry.given.as_ref(),
                    entries,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ReportChildren, ReportEntry};
    use crate::path::LocationKey;

    fn mapping(entries: Vec<(&str, ReportEntry)>) -> DecodeReport {
        let children: ReportChildren = entries
            .into_iter()
            .map(|(key, entry)| (LocationKey::field(key), entry))
            .collect();
        DecodeReport::children(children).unwrap()
    }

    #[test]
    fn test_leaf_is_single_root_entry() {
        let flat = flatten(&DecodeReport::leaf(DecodeError::unexpected_type("number")));
        assert_eq!(flat.len(), 1);

        let entry = flat.get(&Location::root()).unwrap();
        assert_eq!(entry.error.kind, ErrorKind::UnexpectedType);
        assert_eq!(entry.given, None);
    }

    #[test]
    fn test_nested_locations_are_prefixed() {
        let role = mapping(vec![(
            "role",
            ReportEntry::with_given(Value::from(7.0), DecodeError::unexpected_type("string")),
        )]);
        let users = mapping(vec![("bob", ReportEntry::new(role))]);
        let report = mapping(vec![("users", ReportEntry::new(users))]);

        let flat = flatten(&report);
        let location = Location::root().push("users").push("bob").push("role");
        let entry = flat.get(&location).unwrap();

        assert_eq!(flat.len(), 1);
        assert_eq!(entry.error.kind, ErrorKind::UnexpectedType);
        assert_eq!(entry.given, Some(Value::from(7.0)));
    }

    #[test]
    fn test_similar_errors_at_different_locations_stay_distinct() {
        let leaf = || ReportEntry::new(DecodeError::prop_missing());
        let report = mapping(vec![
            ("a", ReportEntry::new(mapping(vec![("x", leaf())]))),
            ("b", ReportEntry::new(mapping(vec![("x", leaf())]))),
            ("x", leaf()),
        ]);

        let flat = flatten(&report);
        let locations: Vec<String> = flat.locations().map(ToString::to_string).collect();
        assert_eq!(locations, vec!["a.x", "b.x", "x"]);
    }

    #[test]
    fn test_none_valid_stays_a_leaf() {
        let mut attempts = ReportChildren::new();
        attempts.insert(
            LocationKey::Index(0),
            ReportEntry::new(DecodeError::unexpected_type("null")),
        );
        let report = mapping(vec![(
            "id",
            ReportEntry::new(DecodeError::none_valid(attempts)),
        )]);

        let flat = flatten(&report);
        assert_eq!(flat.len(), 1);
        assert_eq!(
            flat.get(&Location::root().push("id")).unwrap().error.kind,
            ErrorKind::NoneValid
        );
    }

    #[test]
    fn test_into_iter_keeps_order() {
        let report = mapping(vec![
            ("z", ReportEntry::new(DecodeError::prop_unknown())),
            ("a", ReportEntry::new(DecodeError::prop_unknown())),
        ]);
        let keys: Vec<Location> = flatten(&report).into_iter().map(|(loc, _)| loc).collect();
        assert_eq!(keys, vec![Location::root().push("z"), Location::root().push("a")]);
    }
}
