//! `propguard`: runtime schema validation.
//!
//! Describe the shape of a value with a [`Schema`], then check runtime
//! [`Value`]s against it. Validation yields every violation with its path
//! and a rendered message; nothing is thrown.
//!
//! # Example
//!
//! ```
//! use propguard::{check, errors, ErrorType, Value, T};
//! use serde_json::json;
//!
//! let user = T
//!     .Object(vec![T.Key("id", T.ObjectId(None)), T.Key("name", T.str())], None)
//!     .unwrap();
//!
//! let ok = Value::from(json!({"id": "507f1f77bcf86cd799439011", "name": "Ann"}));
//! assert!(check(&user, &ok));
//!
//! let bad = Value::from(json!({"id": "not-an-id", "name": "Ann"}));
//! let found: Vec<_> = errors(&user, &bad).collect();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].path, "/id");
//! assert_eq!(found[0].error_type, ErrorType::Custom);
//! ```
//!
//! Kinds, formats and the error function live in a [`ValidationContext`].
//! The free functions use a process-wide default; pass your own context for
//! isolation.

pub mod context;
pub mod error;
pub mod message;
pub mod registry;
pub mod schema;
pub mod validator;
pub mod value;

// Re-export the most commonly used types at crate root
pub use context::{
    check, configure, errors, global_context, reset_global_context, set_error_function,
    set_format, set_type, ValidationContext,
};
pub use error::{RegistryError, SchemaError};
pub use message::{default_error_function, default_error_text, ErrorFunction};
pub use registry::{FormatCheck, FormatRegistry, TypeCheck, TypeRegistry};
pub use schema::{
    Key, ObjectSchema, PrimitiveKind, Schema, SchemaBuilder, SchemaOptions, UnsafeKind,
    UnsafeSchema, T,
};
pub use validator::{ErrorParameters, ErrorType, Errors, ValidationError};
pub use value::{Callable, HostObject, Value};
