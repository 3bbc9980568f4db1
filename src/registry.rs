//! Decoder registry for named decoders and reference resolution.
//!
//! This module provides the [`DecoderRegistry`] type that stores decoders by
//! name, and [`RefDecoder`] which looks a name up at decode time. References
//! are how mutually recursive schemas are declared without building an
//! infinite structure.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

use crate::decoder::{Decoder, ValueDecoder};
use crate::error::DecodeError;
use crate::result::{fail, DecodeResult};
use crate::value::Value;

/// Type alias for the decoder storage map.
type DecoderMap = RwLock<HashMap<String, Arc<dyn ValueDecoder>>>;

/// A thread-safe registry of named decoders.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can decode concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// # Example
///
/// ```rust
/// use schematist::{DecoderRegistry, Decoders, Value};
/// use serde_json::json;
///
/// let registry = DecoderRegistry::new();
///
/// registry.register("Email", Decoders::string()).unwrap();
/// registry.register("User", Decoders::record()
///     .field("name", Decoders::string())
///     .field("email", registry.reference("Email"))
/// ).unwrap();
///
/// let result = registry.decode("User", &Value::from(json!({
///     "name": "Alice",
///     "email": "alice@example.com"
/// }))).unwrap();
/// assert!(result.is_success());
/// ```
pub struct DecoderRegistry {
    decoders: Arc<DecoderMap>,
}

impl DecoderRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            decoders: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Registers a decoder under the given name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schematist::{DecoderRegistry, Decoders};
    ///
    /// let registry = DecoderRegistry::new();
    /// registry.register("Email", Decoders::string()).unwrap();
    ///
    /// // Duplicate registration fails
    /// assert!(registry.register("Email", Decoders::string()).is_err());
    /// ```
    pub fn register<D>(&self, name: impl Into<String>, decoder: D) -> Result<(), RegistryError>
    where
        D: Decoder + 'static,
    {
        let name = name.into();
        let mut decoders = self.decoders.write();

        if decoders.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::debug!(name = %name, "registering decoder");
        decoders.insert(name, Arc::new(decoder));
        Ok(())
    }

    /// Retrieves a decoder by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ValueDecoder>> {
        self.decoders.read().get(name).cloned()
    }

    /// Returns true if a decoder is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.decoders.read().contains_key(name)
    }

    /// Returns the number of registered decoders.
    pub fn len(&self) -> usize {
        self.decoders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.read().is_empty()
    }

    /// Creates a decoder that resolves `name` in this registry when it decodes.
    ///
    /// The name does not need to be registered yet, which is what allows a
    /// decoder to refer to itself or to decoders registered after it.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schematist::{Decoder, DecoderRegistry, Decoders, Value};
    /// use serde_json::json;
    ///
    /// let registry = DecoderRegistry::new();
    /// registry.register("Node", Decoders::record()
    ///     .field("value", Decoders::number())
    ///     .field("next", Decoders::maybe(registry.reference("Node")))
    /// ).unwrap();
    ///
    /// let list = Value::from(json!({
    ///     "value": 1,
    ///     "next": { "value": 2, "next": null }
    /// }));
    /// assert!(registry.reference("Node").is(&list));
    /// ```
    pub fn reference(&self, name: impl Into<String>) -> RefDecoder {
        RefDecoder {
            name: name.into(),
            decoders: Arc::downgrade(&self.decoders),
        }
    }

    /// Returns the names referenced by registered decoders that are not
    /// themselves registered, sorted and without duplicates.
    ///
    /// Call this after all decoders are registered to check reference integrity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use schematist::{DecoderRegistry, Decoders};
    ///
    /// let registry = DecoderRegistry::new();
    /// registry.register("User", Decoders::record()
    ///     .field("id", registry.reference("UserId"))  // UserId not registered!
    /// ).unwrap();
    ///
    /// assert_eq!(registry.unresolved_refs(), vec!["UserId"]);
    /// ```
    pub fn unresolved_refs(&self) -> Vec<String> {
        let decoders = self.decoders.read();
        let mut all_refs = Vec::new();

        for decoder in decoders.values() {
            decoder.collect_value_refs(&mut all_refs);
        }

        let mut unresolved: Vec<String> = all_refs
            .into_iter()
            .filter(|name| !decoders.contains_key(name))
            .collect();

        unresolved.sort();
        unresolved.dedup();
        unresolved
    }

    /// Decodes a value with a named decoder.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if no decoder has that name. Decode
    /// failures are reported in the returned [`DecodeResult`].
    pub fn decode(&self, name: &str, input: &Value) -> Result<DecodeResult<Value>, RegistryError> {
        let decoder = self
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;

        Ok(decoder.decode_value(input))
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for DecoderRegistry {
    fn clone(&self) -> Self {
        Self {
            decoders: Arc::clone(&self.decoders),
        }
    }
}

/// A decoder that delegates to a registry entry, looked up by name on every
/// decode.
///
/// A reference holds only a weak handle to its registry, so decoders stored in
/// a registry that refer back to it do not keep it alive. Decoding fails with
/// `unresolved-reference` if the name is not registered or the registry has
/// been dropped.
///
/// References are leaves for traversal.
#[derive(Clone)]
pub struct RefDecoder {
    name: String,
    decoders: Weak<DecoderMap>,
}

impl RefDecoder {
    /// Returns the referenced name.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn resolve(&self) -> Option<Arc<dyn ValueDecoder>> {
        let decoders = self.decoders.upgrade()?;
        // Clone out of the lock so recursive references never hold it while decoding.
        let decoder = decoders.read().get(&self.name).cloned();
        decoder
    }
}

impl Decoder for RefDecoder {
    type Output = Value;

    fn decode(&self, input: &Value) -> DecodeResult<Value> {
        match self.resolve() {
            Some(decoder) => {
                tracing::trace!(name = %self.name, "resolved reference");
                decoder.decode_value(input)
            }
            None => {
                tracing::debug!(name = %self.name, "unresolved reference");
                fail(DecodeError::unresolved_reference(self.name.as_str()))
            }
        }
    }

    fn decode_to_value(&self, input: &Value) -> DecodeResult<Value> {
        self.decode(input)
    }

    fn collect_refs(&self, refs: &mut Vec<String>) {
        refs.push(self.name.clone());
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a decoder with a name that already exists.
    #[error("decoder '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to decode with a name that is not registered.
    #[error("decoder '{0}' not found")]
    NotFound(String),
}
