use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::RegistryError;
use crate::schema::UnsafeSchema;
use crate::value::{HostObject, Value};

/// Predicate deciding whether `value` is valid for an unsafe node.
pub type TypeCheck = Arc<dyn Fn(&UnsafeSchema, &Value) -> bool + Send + Sync>;

/// Mapping from a kind name to its predicate.
///
/// At most one entry per kind; registering again replaces the previous
/// predicate. Schemas hold only the kind name, so a replacement affects
/// every schema that references the kind, already-built ones included.
#[derive(Clone, Default)]
pub struct TypeRegistry {
    entries: HashMap<String, TypeCheck>,
}

impl TypeRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `ObjectId`, `NumericValue` and `ReactNode`.
    ///
    /// `ReactNode` uses the narrow definition (null, number, string or
    /// callable); see [`super::builtin::react_node`] to plug in a host
    /// renderable check.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("ObjectId", super::builtin::object_id);
        registry.register("NumericValue", super::builtin::numeric_value);
        registry.register_check("ReactNode", super::builtin::react_node(Arc::new(|_: &HostObject| false)));
        registry
    }

    pub fn register<F>(&mut self, kind: impl Into<String>, check: F) -> &mut Self
    where
        F: Fn(&UnsafeSchema, &Value) -> bool + Send + Sync + 'static,
    {
        self.register_check(kind, Arc::new(check))
    }

    pub fn register_check(&mut self, kind: impl Into<String>, check: TypeCheck) -> &mut Self {
        self.entries.insert(kind.into(), check);
        self
    }

    pub fn resolve(&self, kind: &str) -> Result<&TypeCheck, RegistryError> {
        self.entries
            .get(kind)
            .ok_or_else(|| RegistryError::UnregisteredKind(kind.to_string()))
    }

    pub fn remove(&mut self, kind: &str) -> Option<TypeCheck> {
        self.entries.remove(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.entries.contains_key(kind)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&String> = self.entries.keys().collect();
        kinds.sort();
        f.debug_struct("TypeRegistry").field("kinds", &kinds).finish()
    }
}
