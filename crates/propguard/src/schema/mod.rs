//! Schema model: immutable trees describing accepted value shapes.

pub mod builder;
mod json;
pub mod options;
#[allow(clippy::module_inception)]
pub mod schema;

pub use builder::{Key, SchemaBuilder, T};
pub use options::{Constraints, SchemaOptions};
pub use schema::*;
