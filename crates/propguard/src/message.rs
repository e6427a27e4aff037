//! Error message resolution.
//!
//! An [`ErrorFunction`] turns one violation into a human string. The
//! active function lives in the [`ValidationContext`](crate::ValidationContext)
//! and is replaced wholesale, never per error kind.

use std::sync::Arc;

use crate::schema::Schema;
use crate::validator::{ErrorParameters, ErrorType};

/// Renders one violation into a message.
pub type ErrorFunction = Arc<dyn Fn(&ErrorParameters<'_>) -> String + Send + Sync>;

/// Default policy, first match wins:
/// 1. the node's `error_message` option, verbatim;
/// 2. `"is missing"` for a missing required property;
/// 3. [`default_error_text`] followed by `not <value>`.
pub fn default_error_function(error: &ErrorParameters<'_>) -> String {
    if let Some(message) = error.schema.error_message() {
        return message.to_string();
    }
    match error.error_type {
        ErrorType::ObjectRequiredProperty => "is missing".to_string(),
        _ => format!("{} not {}", default_error_text(error), error.value.quick_repr()),
    }
}

/// Kind-specific description of a violation, without the offending value.
pub fn default_error_text(error: &ErrorParameters<'_>) -> String {
    let schema = error.schema;
    let c = &schema.options().constraints;
    let num = |n: Option<f64>| n.map(|n| n.to_string()).unwrap_or_default();
    let count = |n: Option<usize>| n.map(|n| n.to_string()).unwrap_or_default();
    let ts = |n: Option<i64>| n.map(|n| n.to_string()).unwrap_or_default();
    match error.error_type {
        ErrorType::Type => format!("Expected {}", expected(schema)),
        ErrorType::Format => format!(
            "Expected string to match '{}' format",
            schema.options().format.as_deref().unwrap_or_default()
        ),
        ErrorType::ObjectRequiredProperty => "Expected required property".to_string(),
        ErrorType::Custom => format!("Expected kind '{}'", schema.kind()),
        ErrorType::UnregisteredKind => format!("Unknown kind '{}'", schema.kind()),
        ErrorType::UnregisteredFormat => format!(
            "Unknown format '{}'",
            schema.options().format.as_deref().unwrap_or_default()
        ),
        ErrorType::StringMinLength => format!(
            "Expected string length greater or equal to {}",
            count(c.min_length)
        ),
        ErrorType::StringMaxLength => format!(
            "Expected string length less or equal to {}",
            count(c.max_length)
        ),
        ErrorType::StringPattern => format!(
            "Expected string to match '{}'",
            c.pattern.as_ref().map(|re| re.as_str()).unwrap_or_default()
        ),
        ErrorType::NumberMinimum => format!(
            "Expected number to be greater or equal to {}",
            num(c.minimum)
        ),
        ErrorType::NumberMaximum => format!(
            "Expected number to be less or equal to {}",
            num(c.maximum)
        ),
        ErrorType::NumberExclusiveMinimum => format!(
            "Expected number to be greater than {}",
            num(c.exclusive_minimum)
        ),
        ErrorType::NumberExclusiveMaximum => format!(
            "Expected number to be less than {}",
            num(c.exclusive_maximum)
        ),
        ErrorType::NumberMultipleOf => format!(
            "Expected number to be a multiple of {}",
            num(c.multiple_of)
        ),
        ErrorType::DateMinimumTimestamp => format!(
            "Expected Date timestamp to be greater or equal to {}",
            ts(c.minimum_timestamp)
        ),
        ErrorType::DateMaximumTimestamp => format!(
            "Expected Date timestamp to be less or equal to {}",
            ts(c.maximum_timestamp)
        ),
        ErrorType::ArrayMinItems => format!(
            "Expected array length to be greater or equal to {}",
            count(c.min_items)
        ),
        ErrorType::ArrayMaxItems => format!(
            "Expected array length to be less or equal to {}",
            count(c.max_items)
        ),
    }
}

fn expected(schema: &Schema) -> &str {
    match schema {
        Schema::Primitive(p) => p.kind.as_str(),
        Schema::Object(_) | Schema::Pick(_) => "object",
        Schema::Array(_) => "array",
        Schema::Unsafe(u) => u.kind.name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SchemaOptions, T};
    use crate::value::Value;

    fn params<'a>(error_type: ErrorType, schema: &'a Schema, value: &'a Value) -> ErrorParameters<'a> {
        ErrorParameters {
            error_type,
            path: "/x",
            schema,
            value,
        }
    }

    #[test]
    fn override_wins_for_every_kind() {
        let schema = T.Date(Some(SchemaOptions::new().error_message("abc")));
        let value = Value::from(5);
        for error_type in [ErrorType::Type, ErrorType::ObjectRequiredProperty, ErrorType::Custom] {
            assert_eq!(default_error_function(&params(error_type, &schema, &value)), "abc");
        }
    }

    #[test]
    fn missing_property_phrase() {
        let schema = T.str();
        let value = Value::Undefined;
        assert_eq!(
            default_error_function(&params(ErrorType::ObjectRequiredProperty, &schema, &value)),
            "is missing"
        );
    }

    #[test]
    fn default_appends_offending_value() {
        let schema = T.str();
        assert_eq!(
            default_error_function(&params(ErrorType::Type, &schema, &Value::from(5))),
            "Expected string not 5"
        );
        assert_eq!(
            default_error_function(&params(ErrorType::Type, &schema, &Value::Null)),
            "Expected string not null"
        );
        let arr = T.Array(T.str(), None);
        assert_eq!(
            default_error_function(&params(ErrorType::Type, &arr, &Value::from(serde_json::json!({"a": 1})))),
            r#"Expected array not {"a":1}"#
        );
    }

    #[test]
    fn kind_specific_texts() {
        let date = T.String(Some(SchemaOptions::new().format("date")));
        let v = Value::from("2024-02-30");
        assert_eq!(
            default_error_text(&params(ErrorType::Format, &date, &v)),
            "Expected string to match 'date' format"
        );
        let id = T.ObjectId(None);
        assert_eq!(
            default_error_text(&params(ErrorType::Custom, &id, &v)),
            "Expected kind 'ObjectId'"
        );
        let short = T.String(Some(SchemaOptions::new().min_length(3)));
        assert_eq!(
            default_error_text(&params(ErrorType::StringMinLength, &short, &v)),
            "Expected string length greater or equal to 3"
        );
    }
}
