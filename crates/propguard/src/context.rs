//! [`ValidationContext`], the registries and error function a validation
//! run consults, plus the process-wide default context.
//!
//! The global context is an immutable snapshot behind a read-write lock.
//! Reconfiguring it swaps in a modified copy; validations already running
//! keep the snapshot they started with. Configure it during start-up; tests
//! and embedders that need isolation should build their own context.

use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::message::{default_error_function, ErrorFunction};
use crate::registry::builtin::{react_node, RenderableCheck};
use crate::registry::{FormatRegistry, TypeRegistry};
use crate::schema::{Schema, UnsafeSchema};
use crate::validator::walker::ContextRef;
use crate::validator::{ErrorParameters, Errors};
use crate::value::{HostObject, Value};

/// Configuration for validation: type registry, format registry and the
/// active error function.
#[derive(Clone)]
pub struct ValidationContext {
    types: TypeRegistry,
    formats: FormatRegistry,
    error_function: ErrorFunction,
}

impl ValidationContext {
    /// Context with the built-in kinds and formats and the default error
    /// function.
    pub fn new() -> Self {
        Self {
            types: TypeRegistry::with_builtins(),
            formats: FormatRegistry::with_builtins(),
            error_function: Arc::new(default_error_function),
        }
    }

    /// Context with empty registries and the default error function.
    pub fn empty() -> Self {
        Self {
            types: TypeRegistry::new(),
            formats: FormatRegistry::new(),
            error_function: Arc::new(default_error_function),
        }
    }

    /// Replaces the `ReactNode` kind with one that also accepts host
    /// objects for which `renderable` returns true.
    pub fn with_renderable<F>(mut self, renderable: F) -> Self
    where
        F: Fn(&HostObject) -> bool + Send + Sync + 'static,
    {
        let renderable: RenderableCheck = Arc::new(renderable);
        self.types.register_check("ReactNode", react_node(renderable));
        self
    }

    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut TypeRegistry {
        &mut self.types
    }

    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    pub fn formats_mut(&mut self) -> &mut FormatRegistry {
        &mut self.formats
    }

    pub fn register_type<F>(&mut self, kind: impl Into<String>, check: F) -> &mut Self
    where
        F: Fn(&UnsafeSchema, &Value) -> bool + Send + Sync + 'static,
    {
        self.types.register(kind, check);
        self
    }

    pub fn register_format<F>(&mut self, name: impl Into<String>, check: F) -> &mut Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.formats.register(name, check);
        self
    }

    pub fn error_function(&self) -> &ErrorFunction {
        &self.error_function
    }

    pub fn set_error_function<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&ErrorParameters<'_>) -> String + Send + Sync + 'static,
    {
        self.error_function = Arc::new(f);
        self
    }

    /// Renders a message with the active error function.
    pub fn render(&self, error: &ErrorParameters<'_>) -> String {
        (self.error_function)(error)
    }

    /// True when `value` has no violations against `schema`.
    pub fn check(&self, schema: &Schema, value: &Value) -> bool {
        self.errors(schema, value).next().is_none()
    }

    /// Every violation of `value` against `schema`, lazily, in pre-order.
    pub fn errors<'a>(&'a self, schema: &'a Schema, value: &'a Value) -> Errors<'a> {
        Errors::new(ContextRef::Borrowed(self), schema, value)
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ValidationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("types", &self.types)
            .field("formats", &self.formats)
            .finish_non_exhaustive()
    }
}

// ------------------------------------------------------------------
// Global default context

fn global() -> &'static RwLock<Arc<ValidationContext>> {
    static GLOBAL: OnceLock<RwLock<Arc<ValidationContext>>> = OnceLock::new();
    GLOBAL.get_or_init(|| RwLock::new(Arc::new(ValidationContext::new())))
}

/// Current snapshot of the global context.
pub fn global_context() -> Arc<ValidationContext> {
    global()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Applies `f` to a copy of the global context and publishes the result.
pub fn configure<F>(f: F)
where
    F: FnOnce(&mut ValidationContext),
{
    let mut guard = global().write().unwrap_or_else(PoisonError::into_inner);
    let mut next = ValidationContext::clone(&guard);
    f(&mut next);
    *guard = Arc::new(next);
}

/// Restores the global context to [`ValidationContext::new`].
pub fn reset_global_context() {
    configure(|ctx| *ctx = ValidationContext::new());
}

/// Installs or replaces a kind predicate in the global context.
pub fn set_type<F>(kind: impl Into<String>, check: F)
where
    F: Fn(&UnsafeSchema, &Value) -> bool + Send + Sync + 'static,
{
    configure(|ctx| {
        ctx.register_type(kind, check);
    });
}

/// Installs or replaces a string format predicate in the global context.
pub fn set_format<F>(name: impl Into<String>, check: F)
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    configure(|ctx| {
        ctx.register_format(name, check);
    });
}

/// Replaces the global error function.
pub fn set_error_function<F>(f: F)
where
    F: Fn(&ErrorParameters<'_>) -> String + Send + Sync + 'static,
{
    configure(|ctx| {
        ctx.set_error_function(f);
    });
}

/// [`ValidationContext::check`] against the global context.
pub fn check(schema: &Schema, value: &Value) -> bool {
    global_context().check(schema, value)
}

/// [`ValidationContext::errors`] against the global context.
///
/// The iterator holds the snapshot current at the time of the call.
pub fn errors<'a>(schema: &'a Schema, value: &'a Value) -> Errors<'a> {
    Errors::new(ContextRef::Shared(global_context()), schema, value)
}
