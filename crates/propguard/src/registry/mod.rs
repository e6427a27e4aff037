//! Type and format registries: name → predicate lookups that extend the
//! validator vocabulary.

pub mod builtin;
pub mod formats;
pub mod types;

pub use formats::{FormatCheck, FormatRegistry};
pub use types::{TypeCheck, TypeRegistry};
