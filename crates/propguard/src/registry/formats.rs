use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::RegistryError;

/// Predicate deciding whether a string satisfies a named format.
pub type FormatCheck = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Mapping from a string format name to its predicate.
///
/// Independent namespace from the type registry, same replacement rule.
#[derive(Clone, Default)]
pub struct FormatRegistry {
    entries: HashMap<String, FormatCheck>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `date-time` and `date`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("date-time", super::builtin::date_time);
        registry.register("date", super::builtin::date);
        registry
    }

    pub fn register<F>(&mut self, name: impl Into<String>, check: F) -> &mut Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.entries.insert(name.into(), Arc::new(check));
        self
    }

    pub fn resolve(&self, name: &str) -> Result<&FormatCheck, RegistryError> {
        self.entries
            .get(name)
            .ok_or_else(|| RegistryError::UnregisteredFormat(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Option<FormatCheck> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for FormatRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&String> = self.entries.keys().collect();
        names.sort();
        f.debug_struct("FormatRegistry").field("formats", &names).finish()
    }
}
