//! Structural locations within decoders and their inputs.
//!
//! This module provides [`LocationKey`] and [`Location`] for addressing a point
//! inside a (possibly nested) decoder or input value, e.g. `users.bob.role`.

use std::fmt::{self, Display};

/// One step into a structural location.
///
/// Field names address record fields, variant tags and dictionary keys.
/// Indices address union alternatives. The two reserved markers stand for the
/// entry and key slots of a dictionary when introspecting a decoder statically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LocationKey {
    /// A field or tag name (e.g. `user`, `email`)
    Field(String),
    /// A positional index (e.g. the second alternative of a union)
    Index(usize),
    /// The value slot shared by every entry of a dictionary
    DictEntry,
    /// The key slot shared by every entry of a dictionary
    DictKey,
}

impl LocationKey {
    /// Creates a new field key.
    pub fn field(name: impl Into<String>) -> Self {
        LocationKey::Field(name.into())
    }

    /// Creates a new index key.
    pub fn index(idx: usize) -> Self {
        LocationKey::Index(idx)
    }
}

impl Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationKey::Field(name) => write!(f, "{}", name),
            LocationKey::Index(idx) => write!(f, "{}", idx),
            LocationKey::DictEntry => write!(f, "<entry>"),
            LocationKey::DictKey => write!(f, "<key>"),
        }
    }
}

impl From<&str> for LocationKey {
    fn from(name: &str) -> Self {
        LocationKey::Field(name.to_string())
    }
}

impl From<String> for LocationKey {
    fn from(name: String) -> Self {
        LocationKey::Field(name)
    }
}

impl From<usize> for LocationKey {
    fn from(idx: usize) -> Self {
        LocationKey::Index(idx)
    }
}

/// An ordered path of [`LocationKey`]s from the root to a nested point.
///
/// The empty location denotes the root. Locations render with their keys
/// joined by `.`.
///
/// # Example
///
/// ```rust
/// use schematist::Location;
///
/// let location = Location::root()
///     .push("users")
///     .push("bob")
///     .push("role");
///
/// assert_eq!(location.to_string(), "users.bob.role");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Location {
    keys: Vec<LocationKey>,
}

impl Location {
    /// Creates an empty location representing the root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns a new location with `key` appended.
    ///
    /// This method does not modify the original location.
    pub fn push(&self, key: impl Into<LocationKey>) -> Self {
        let mut keys = self.keys.clone();
        keys.push(key.into());
        Self { keys }
    }

    /// Returns a new location with `key` prepended.
    pub fn prefixed(&self, key: LocationKey) -> Self {
        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.push(key);
        keys.extend(self.keys.iter().cloned());
        Self { keys }
    }

    /// Returns true if this is the root location (no keys).
    pub fn is_root(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns an iterator over the keys, root first.
    pub fn keys(&self) -> impl Iterator<Item = &LocationKey> {
        self.keys.iter()
    }

    /// Returns the parent location, or None if this is the root.
    pub fn parent(&self) -> Option<Self> {
        if self.keys.is_empty() {
            None
        } else {
            Some(Self {
                keys: self.keys[..self.keys.len() - 1].to_vec(),
            })
        }
    }

    /// Returns the last key, or None if this is the root.
    pub fn last(&self) -> Option<&LocationKey> {
        self.keys.last()
    }
}

impl From<Vec<LocationKey>> for Location {
    fn from(keys: Vec<LocationKey>) -> Self {
        Self { keys }
    }
}

impl FromIterator<LocationKey> for Location {
    fn from_iter<I: IntoIterator<Item = LocationKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}
