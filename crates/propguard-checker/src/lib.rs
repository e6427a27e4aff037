//! `propguard-checker`: development-mode input checks for components.
//!
//! A [`Checker`] validates a component's input against a schema and, when
//! it is invalid, returns one [`PropsError`] whose message groups every
//! violation by path. Outside [`Mode::Development`] checkers do nothing.
//!
//! # Example
//!
//! ```
//! use propguard::{Value, T};
//! use propguard_checker::{Checker, Mode};
//! use serde_json::json;
//!
//! let props = T.Object(vec![T.Key("name", T.str())], None).unwrap();
//! let checker = Checker::new(props, Mode::Development);
//!
//! let err = checker.validate("Example", &Value::from(json!({}))).unwrap();
//! assert!(err.to_string().starts_with("Example component has invalid props."));
//! assert!(err.to_string().contains("- \"name\" is missing"));
//! ```

pub mod checker;
pub mod mode;
pub mod report;

pub use checker::{make_checker, Checker};
pub use mode::{Mode, MODE_ENV_VAR};
pub use report::{debug_dump, format_errors, ErrorRecord, PropsError};
