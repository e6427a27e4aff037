//! Validation engine: walks a schema/value pair and yields every violation.

pub mod error;
pub mod path;
pub(crate) mod walker;

pub use error::{ErrorParameters, ErrorType, ValidationError};
pub use walker::Errors;
