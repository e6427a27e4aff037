use regex::Regex;
use serde_json::{Map, Value as Json};

use crate::error::SchemaError;

/// Value constraints carried by primitive and array nodes.
///
/// Only the constraints matching a node's kind are consulted; the rest are
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<f64>,
    pub exclusive_maximum: Option<f64>,
    pub multiple_of: Option<f64>,
    /// Milliseconds since the Unix epoch, inclusive.
    pub minimum_timestamp: Option<i64>,
    /// Milliseconds since the Unix epoch, inclusive.
    pub maximum_timestamp: Option<i64>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
}

/// Options bag accepted by every schema builder.
///
/// `error_message` replaces every message rendered for errors raised at the
/// node. `format` names a string format from the format registry. Anything
/// in `extra` is opaque metadata that custom type checks and error
/// functions may read.
#[derive(Debug, Clone, Default)]
pub struct SchemaOptions {
    pub error_message: Option<String>,
    pub format: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub extra: Map<String, Json>,
    pub constraints: Constraints,
}

impl SchemaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<Json>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.constraints.min_length = Some(n);
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.constraints.max_length = Some(n);
        self
    }

    /// Compiles `pattern`; fails fast on an invalid expression.
    pub fn pattern(mut self, pattern: &str) -> Result<Self, SchemaError> {
        let re = Regex::new(pattern).map_err(|e| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        self.constraints.pattern = Some(re);
        Ok(self)
    }

    pub fn minimum(mut self, n: f64) -> Self {
        self.constraints.minimum = Some(n);
        self
    }

    pub fn maximum(mut self, n: f64) -> Self {
        self.constraints.maximum = Some(n);
        self
    }

    pub fn exclusive_minimum(mut self, n: f64) -> Self {
        self.constraints.exclusive_minimum = Some(n);
        self
    }

    pub fn exclusive_maximum(mut self, n: f64) -> Self {
        self.constraints.exclusive_maximum = Some(n);
        self
    }

    /// A non-positive or non-finite divisor disables the check.
    pub fn multiple_of(mut self, n: f64) -> Self {
        self.constraints.multiple_of = Some(n);
        self
    }

    pub fn minimum_timestamp(mut self, ms: i64) -> Self {
        self.constraints.minimum_timestamp = Some(ms);
        self
    }

    pub fn maximum_timestamp(mut self, ms: i64) -> Self {
        self.constraints.maximum_timestamp = Some(ms);
        self
    }

    pub fn min_items(mut self, n: usize) -> Self {
        self.constraints.min_items = Some(n);
        self
    }

    pub fn max_items(mut self, n: usize) -> Self {
        self.constraints.max_items = Some(n);
        self
    }

    /// Applies every option set in `over` on top of `self`; `extra` keys
    /// merge with `over` winning.
    pub fn overlay(mut self, over: SchemaOptions) -> Self {
        let c = over.constraints;
        let base = &mut self.constraints;
        base.min_length = c.min_length.or(base.min_length);
        base.max_length = c.max_length.or(base.max_length);
        base.pattern = c.pattern.or(base.pattern.take());
        base.minimum = c.minimum.or(base.minimum);
        base.maximum = c.maximum.or(base.maximum);
        base.exclusive_minimum = c.exclusive_minimum.or(base.exclusive_minimum);
        base.exclusive_maximum = c.exclusive_maximum.or(base.exclusive_maximum);
        base.multiple_of = c.multiple_of.or(base.multiple_of);
        base.minimum_timestamp = c.minimum_timestamp.or(base.minimum_timestamp);
        base.maximum_timestamp = c.maximum_timestamp.or(base.maximum_timestamp);
        base.min_items = c.min_items.or(base.min_items);
        base.max_items = c.max_items.or(base.max_items);
        self.error_message = over.error_message.or(self.error_message);
        self.format = over.format.or(self.format);
        self.title = over.title.or(self.title);
        self.description = over.description.or(self.description);
        self.extra.extend(over.extra);
        self
    }
}
