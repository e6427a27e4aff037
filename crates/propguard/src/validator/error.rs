use std::fmt;

use crate::schema::Schema;
use crate::value::Value;

/// Category of a single violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    /// Value has the wrong runtime type for the node.
    Type,
    /// String failed its registered format check.
    Format,
    /// A required property is absent.
    ObjectRequiredProperty,
    /// A registered kind predicate returned `false`.
    Custom,
    UnregisteredKind,
    UnregisteredFormat,
    StringMinLength,
    StringMaxLength,
    StringPattern,
    NumberMinimum,
    NumberMaximum,
    NumberExclusiveMinimum,
    NumberExclusiveMaximum,
    NumberMultipleOf,
    DateMinimumTimestamp,
    DateMaximumTimestamp,
    ArrayMinItems,
    ArrayMaxItems,
}

impl ErrorType {
    pub fn name(self) -> &'static str {
        match self {
            Self::Type => "Type",
            Self::Format => "Format",
            Self::ObjectRequiredProperty => "ObjectRequiredProperty",
            Self::Custom => "Custom",
            Self::UnregisteredKind => "UnregisteredKind",
            Self::UnregisteredFormat => "UnregisteredFormat",
            Self::StringMinLength => "StringMinLength",
            Self::StringMaxLength => "StringMaxLength",
            Self::StringPattern => "StringPattern",
            Self::NumberMinimum => "NumberMinimum",
            Self::NumberMaximum => "NumberMaximum",
            Self::NumberExclusiveMinimum => "NumberExclusiveMinimum",
            Self::NumberExclusiveMaximum => "NumberExclusiveMaximum",
            Self::NumberMultipleOf => "NumberMultipleOf",
            Self::DateMinimumTimestamp => "DateMinimumTimestamp",
            Self::DateMaximumTimestamp => "DateMaximumTimestamp",
            Self::ArrayMinItems => "ArrayMinItems",
            Self::ArrayMaxItems => "ArrayMaxItems",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything known about a violation before its message is rendered.
///
/// This is what an error function receives.
#[derive(Debug, Clone, Copy)]
pub struct ErrorParameters<'a> {
    pub error_type: ErrorType,
    pub path: &'a str,
    /// The node that rejected the value.
    pub schema: &'a Schema,
    pub value: &'a Value,
}

/// One violation, addressed by its path from the root value.
#[derive(Debug, Clone)]
pub struct ValidationError<'a> {
    pub error_type: ErrorType,
    /// Slash-delimited, rooted at `""`; keys are escaped as in RFC 6901.
    pub path: String,
    pub schema: &'a Schema,
    pub value: &'a Value,
    pub message: String,
}

impl ValidationError<'_> {
    pub fn parameters(&self) -> ErrorParameters<'_> {
        ErrorParameters {
            error_type: self.error_type,
            path: &self.path,
            schema: self.schema,
            value: self.value,
        }
    }
}

impl fmt::Display for ValidationError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.message)
    }
}
