//! Construction-time and registry error types.

use thiserror::Error;

/// Authoring error raised while building a schema. Always fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A `Pick` named a key the source object does not declare.
    #[error("unknown key '{0}' in pick")]
    UnknownKey(String),
    /// An object declared the same property twice.
    #[error("duplicate property '{0}'")]
    DuplicateKey(String),
    /// `Pick` was applied to a schema that is not an object.
    #[error("expected an object schema, got '{0}'")]
    NotAnObject(String),
    /// A string `pattern` failed to compile.
    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Lookup failure in a type or format registry.
///
/// The validator never propagates this; it reports it as a validation
/// error at the node that needed the missing entry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unregistered kind '{0}'")]
    UnregisteredKind(String),
    #[error("unregistered format '{0}'")]
    UnregisteredFormat(String),
}
