//! Aggregated error report for one invalid input.

use indexmap::{IndexMap, IndexSet};
use propguard::{ErrorType, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// Owned copy of one validation error, kept on the report.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    pub path: String,
    pub error_type: ErrorType,
    pub message: String,
    /// JSON form of the offending value; `None` when it has none (undefined).
    pub value: Option<serde_json::Value>,
    /// JSON form of the rejecting schema node.
    pub schema: serde_json::Value,
}

impl From<&ValidationError<'_>> for ErrorRecord {
    fn from(e: &ValidationError<'_>) -> Self {
        Self {
            path: e.path.clone(),
            error_type: e.error_type,
            message: e.message.clone(),
            value: e.value.to_json(),
            schema: e.schema.to_json(),
        }
    }
}

/// Debug dump line: every field except the error type.
#[derive(Serialize)]
struct DumpLine<'a> {
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a serde_json::Value>,
    message: &'a str,
    schema: &'a serde_json::Value,
}

/// A component received input that does not match its schema.
#[derive(Debug, Error, Clone)]
#[error("{message}")]
pub struct PropsError {
    pub component: String,
    pub errors: Vec<ErrorRecord>,
    message: String,
}

impl PropsError {
    pub fn new(component: impl Into<String>, errors: Vec<ErrorRecord>) -> Self {
        let component = component.into();
        let message = format!(
            "{component} component has invalid props. \n\n{}\n\n{}",
            format_errors(&errors),
            debug_dump(&errors)
        );
        Self {
            component,
            errors,
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One line per distinct path, in first-seen order:
/// `- "<path>" <message> and <message>…`. Repeated messages within a path
/// collapse; the path loses its leading `/`.
pub fn format_errors(errors: &[ErrorRecord]) -> String {
    let mut grouped: IndexMap<&str, IndexSet<&str>> = IndexMap::new();
    for e in errors {
        grouped
            .entry(e.path.as_str())
            .or_default()
            .insert(e.message.as_str());
    }
    grouped
        .iter()
        .map(|(path, messages)| {
            let path = path.strip_prefix('/').unwrap_or(*path);
            let joined: Vec<&str> = messages.iter().copied().collect();
            format!("- \"{path}\" {}", joined.join(" and "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One compact JSON object per error, in error order.
pub fn debug_dump(errors: &[ErrorRecord]) -> String {
    errors
        .iter()
        .filter_map(|e| {
            serde_json::to_string(&DumpLine {
                path: &e.path,
                value: e.value.as_ref(),
                message: &e.message,
                schema: &e.schema,
            })
            .ok()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
