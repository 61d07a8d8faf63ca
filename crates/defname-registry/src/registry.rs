//! Definition registry implementation.

use std::collections::HashMap;

use defname_canonical::{CanonicalName, Describe, Namer, TypeDescriptor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::digest::{fingerprint, Digest};
use crate::errors::RegistryError;

/// A registered schema body.
#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    /// Key of the definition.
    pub name: CanonicalName,
    /// Caller-supplied schema body.
    pub schema: Value,
    /// Fingerprint of the canonicalized body.
    pub fingerprint: Digest,
}

/// Outcome of a successful registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// The name was new and the definition was appended.
    Inserted,
    /// An identical body was already registered under the name.
    Existing,
}

/// Schema definitions keyed by canonical name, kept in insertion order.
///
/// Registering the same name twice is allowed only when both bodies are
/// identical after canonicalization; anything else is a collision.
///
/// # Example
///
/// ```rust
/// use defname_canonical::{Namer, NamingPolicy, TypeDescriptor};
/// use defname_registry::{DefinitionRegistry, Registration};
/// use serde_json::json;
///
/// let namer = Namer::new(NamingPolicy::new());
/// let mut registry = DefinitionRegistry::new();
///
/// let page = TypeDescriptor::slice(TypeDescriptor::named("acme/api", "Widget"));
/// let name = registry.register_type(&namer, &page, json!({"type": "array"}))?;
/// assert_eq!(name.reference(), "#/definitions/arr_Widget");
///
/// let again = registry.register(name, json!({"type": "array"}))?;
/// assert_eq!(again, Registration::Existing);
/// # Ok::<(), defname_registry::RegistryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefinitionRegistry {
    entries: Vec<Definition>,
    index: HashMap<CanonicalName, usize>,
}

impl DefinitionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a definition by name.
    pub fn get(&self, name: &CanonicalName) -> Option<&Definition> {
        self.index.get(name).map(|&idx| &self.entries[idx])
    }

    /// True when `name` is registered.
    pub fn contains(&self, name: &CanonicalName) -> bool {
        self.index.contains_key(name)
    }

    /// Definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.entries.iter()
    }

    /// Registers `schema` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Collision`] if a different body is already
    /// registered under `name`, or [`RegistryError::Canonicalization`] if the
    /// body cannot be fingerprinted.
    pub fn register(
        &mut self,
        name: CanonicalName,
        schema: Value,
    ) -> Result<Registration, RegistryError> {
        let fingerprint = fingerprint(&schema)?;

        if let Some(&idx) = self.index.get(&name) {
            if self.entries[idx].fingerprint == fingerprint {
                debug!(name = %name, "definition already registered");
                return Ok(Registration::Existing);
            }
            warn!(name = %name, "definition name collision");
            return Err(RegistryError::Collision {
                name: name.into_string(),
            });
        }

        debug!(name = %name, fingerprint = %fingerprint.b64, "registered definition");
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push(Definition {
            name,
            schema,
            fingerprint,
        });
        Ok(Registration::Inserted)
    }

    /// Names `descriptor` with `namer` and registers `schema` under that name.
    ///
    /// Returns the canonical name; use [`CanonicalName::reference`] to point at it.
    pub fn register_type(
        &mut self,
        namer: &Namer,
        descriptor: &TypeDescriptor,
        schema: Value,
    ) -> Result<CanonicalName, RegistryError> {
        let name = namer.name_type(descriptor)?;
        self.register(name.clone(), schema)?;
        Ok(name)
    }

    /// Like [`register_type`](Self::register_type), using `T`'s descriptor.
    pub fn register_described<T: Describe + ?Sized>(
        &mut self,
        namer: &Namer,
        schema: Value,
    ) -> Result<CanonicalName, RegistryError> {
        self.register_type(namer, &T::describe(), schema)
    }
}

impl Serialize for DefinitionRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for definition in &self.entries {
            map.serialize_entry(definition.name.as_str(), &definition.schema)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn name(s: &str) -> CanonicalName {
        CanonicalName::parse(s).unwrap()
    }

    #[test]
    fn identical_bodies_deduplicate() {
        let mut registry = DefinitionRegistry::new();
        assert_eq!(
            registry
                .register(name("G0"), json!({"type": "object", "title": "G0"}))
                .unwrap(),
            Registration::Inserted
        );
        assert_eq!(
            registry
                .register(name("G0"), json!({"title": "G0", "type": "object"}))
                .unwrap(),
            Registration::Existing
        );
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&name("G0")));
        assert!(!registry.contains(&name("G1")));
    }

    #[test]
    fn different_bodies_collide() {
        let mut registry = DefinitionRegistry::new();
        registry.register(name("G0"), json!({"type": "object"})).unwrap();
        let err = registry
            .register(name("G0"), json!({"type": "string"}))
            .unwrap_err();
        assert!(matches!(err, RegistryError::Collision { name } if name == "G0"));
        assert_eq!(
            registry.get(&name("G0")).unwrap().schema,
            json!({"type": "object"})
        );
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut registry = DefinitionRegistry::new();
        registry.register(name("zeta"), json!({"type": "string"})).unwrap();
        registry.register(name("alpha"), json!({"type": "integer"})).unwrap();
        assert_eq!(
            serde_json::to_string(&registry).unwrap(),
            r#"{"zeta":{"type":"string"},"alpha":{"type":"integer"}}"#
        );
    }
}
