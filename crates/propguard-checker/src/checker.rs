use std::sync::Arc;

use propguard::{global_context, Schema, ValidationContext, Value};

use crate::mode::Mode;
use crate::report::{ErrorRecord, PropsError};

/// Validates a component's input against one schema.
///
/// In [`Mode::Production`] nothing is validated and every call returns
/// `None`.
#[derive(Debug, Clone)]
pub struct Checker {
    schema: Arc<Schema>,
    mode: Mode,
    /// `None` uses the global context snapshot current at each call.
    context: Option<Arc<ValidationContext>>,
}

impl Checker {
    pub fn new(schema: Schema, mode: Mode) -> Self {
        Self {
            schema: Arc::new(schema),
            mode,
            context: None,
        }
    }

    pub fn with_context(schema: Schema, mode: Mode, context: Arc<ValidationContext>) -> Self {
        Self {
            schema: Arc::new(schema),
            mode,
            context: Some(context),
        }
    }

    /// Checker whose mode comes from the environment.
    pub fn from_env(schema: Schema) -> Self {
        Self::new(schema, Mode::from_env())
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns a report naming `component` if `value` is invalid.
    pub fn validate(&self, component: &str, value: &Value) -> Option<PropsError> {
        if !self.mode.is_development() {
            tracing::trace!(component, "skipping input validation outside development");
            return None;
        }
        let context = self.context.clone().unwrap_or_else(global_context);
        let errors: Vec<ErrorRecord> = context
            .errors(&self.schema, value)
            .map(|e| ErrorRecord::from(&e))
            .collect();
        if errors.is_empty() {
            return None;
        }
        tracing::debug!(component, errors = errors.len(), "invalid input");
        Some(PropsError::new(component, errors))
    }
}

/// Wraps [`Checker::validate`] in a closure.
pub fn make_checker(schema: Schema, mode: Mode) -> impl Fn(&str, &Value) -> Option<PropsError> + Send + Sync {
    let checker = Checker::new(schema, mode);
    move |component: &str, value: &Value| checker.validate(component, value)
}
