//! Static traversal of decoder structure.
//!
//! Compound decoders expose their immediate children through [`Traversable`].
//! The functions here walk that structure without any input value, which is
//! how tooling inspects the shape of a schema.
//!
//! Lazy decoders and registry references are leaves: their targets are only
//! known at decode time.

use std::sync::Arc;

use crate::decoder::{Traversable, ValueDecoder};
use crate::path::{Location, LocationKey};

/// Visits `decoder` and every decoder reachable from it, depth-first and
/// parents before children.
///
/// The root is visited at [`Location::root`]; each child is visited at its
/// parent's location extended with the child's key.
///
/// # Example
///
/// ```rust
/// use schematist::{traverse, Decoders, Location};
///
/// let decoder = Decoders::record()
///     .field("name", Decoders::string())
///     .field("tags", Decoders::dict(Decoders::string()));
///
/// let mut visited = Vec::new();
/// traverse(&decoder, |_, location| visited.push(location.to_string()));
///
/// assert_eq!(visited, vec!["", "name", "tags", "tags.<entry>"]);
/// ```
pub fn traverse<F>(decoder: &dyn ValueDecoder, mut visit: F)
where
    F: FnMut(&dyn ValueDecoder, &Location),
{
    walk(decoder, &Location::root(), &mut visit);
}

fn walk<F>(decoder: &dyn ValueDecoder, location: &Location, visit: &mut F)
where
    F: FnMut(&dyn ValueDecoder, &Location),
{
    visit(decoder, location);

    if let Some(node) = decoder.traversable() {
        for (key, child) in node.children() {
            walk(child.as_ref(), &location.push(key), visit);
        }
    }
}

/// Resolves `location` against the static children of `root`.
///
/// Returns `None` if some key along the way does not name a child. The root
/// location resolves to `root` itself.
///
/// # Example
///
/// ```rust
/// use schematist::{erase, locate, Decoder, Decoders, Location, LocationKey, Value};
///
/// let root = erase(
///     Decoders::record().field("scores", Decoders::dict(Decoders::number())),
/// );
///
/// let entry = locate(&root, &Location::root().push("scores").push(LocationKey::DictEntry))
///     .unwrap();
/// assert!(entry.is(&Value::from(1.0)));
///
/// assert!(locate(&root, &Location::root().push("missing")).is_none());
/// ```
pub fn locate(root: &Arc<dyn ValueDecoder>, location: &Location) -> Option<Arc<dyn ValueDecoder>> {
    location.keys().try_fold(Arc::clone(root), |current, key| {
        current
            .traversable()
            .and_then(|node| child_at(node, key))
    })
}

fn child_at(node: &dyn Traversable, key: &LocationKey) -> Option<Arc<dyn ValueDecoder>> {
    node.children().get(key).cloned()
}
