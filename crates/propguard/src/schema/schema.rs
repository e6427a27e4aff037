use indexmap::IndexMap;

use super::options::{Constraints, SchemaOptions};
use crate::value::Value;

/// Built-in atomic value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    String,
    Number,
    /// A finite number with no fractional part.
    Integer,
    Boolean,
    Null,
    Date,
    Function,
    /// Accepts every value, `undefined` included.
    Any,
}

impl PrimitiveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Date => "Date",
            Self::Function => "function",
            Self::Any => "any",
        }
    }

    /// Type check only; constraints are applied separately.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Self::String => matches!(value, Value::String(_)),
            Self::Number => matches!(value, Value::Number(n) if !n.is_nan()),
            Self::Integer => matches!(value, Value::Number(n) if n.is_finite() && n.fract() == 0.0),
            Self::Boolean => matches!(value, Value::Bool(_)),
            Self::Null => matches!(value, Value::Null),
            Self::Date => matches!(value, Value::Date(_)),
            Self::Function => matches!(value, Value::Function(_)),
            Self::Any => true,
        }
    }
}

/// Leaf node for one of the [`PrimitiveKind`]s.
#[derive(Debug, Clone)]
pub struct PrimitiveSchema {
    pub kind: PrimitiveKind,
    pub options: SchemaOptions,
}

impl PrimitiveSchema {
    pub fn constraints(&self) -> &Constraints {
        &self.options.constraints
    }

    pub fn format(&self) -> Option<&str> {
        self.options.format.as_deref()
    }
}

/// A declared object property.
#[derive(Debug, Clone)]
pub struct Property {
    pub schema: Schema,
    pub optional: bool,
}

/// Object with declared properties. Undeclared keys in a value are ignored.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    /// Declaration order is the traversal order.
    pub properties: IndexMap<String, Property>,
    pub options: SchemaOptions,
}

impl ObjectSchema {
    pub fn property(&self, key: &str) -> Option<&Schema> {
        self.properties.get(key).map(|p| &p.schema)
    }

    pub fn is_required(&self, key: &str) -> bool {
        self.properties.get(key).is_some_and(|p| !p.optional)
    }

    /// Names of required properties, in declaration order.
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, p)| !p.optional)
            .map(|(k, _)| k.as_str())
    }
}

/// Homogeneous array.
#[derive(Debug, Clone)]
pub struct ArraySchema {
    pub element: Box<Schema>,
    pub options: SchemaOptions,
}

/// Projection of an object schema onto a subset of its keys.
///
/// `derived` holds the selected properties, in pick order, with their
/// original sub-schemas and the source's options.
#[derive(Debug, Clone)]
pub struct PickSchema {
    pub derived: ObjectSchema,
}

/// Discriminator of an [`UnsafeSchema`]; resolved by name in the type
/// registry at validation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UnsafeKind {
    /// 24-hex-character object identifier.
    ObjectId,
    /// Number, or a string that parses as one.
    NumericValue,
    /// Anything a UI host can render.
    ReactNode,
    Custom(String),
}

impl UnsafeKind {
    pub fn name(&self) -> &str {
        match self {
            Self::ObjectId => "ObjectId",
            Self::NumericValue => "NumericValue",
            Self::ReactNode => "ReactNode",
            Self::Custom(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name {
            "ObjectId" => Self::ObjectId,
            "NumericValue" => Self::NumericValue,
            "ReactNode" => Self::ReactNode,
            other => Self::Custom(other.to_string()),
        }
    }
}

/// Opaque leaf validated by a registered predicate.
#[derive(Debug, Clone)]
pub struct UnsafeSchema {
    pub kind: UnsafeKind,
    pub options: SchemaOptions,
}

/// A schema node. Immutable once built; share it freely across threads.
#[derive(Debug, Clone)]
pub enum Schema {
    Primitive(PrimitiveSchema),
    Object(ObjectSchema),
    Array(ArraySchema),
    Pick(PickSchema),
    Unsafe(UnsafeSchema),
}

impl Schema {
    /// Returns the kind label for this node.
    pub fn kind(&self) -> &str {
        match self {
            Self::Primitive(s) => s.kind.as_str(),
            Self::Object(_) | Self::Pick(_) => "object",
            Self::Array(_) => "array",
            Self::Unsafe(s) => s.kind.name(),
        }
    }

    pub fn options(&self) -> &SchemaOptions {
        match self {
            Self::Primitive(s) => &s.options,
            Self::Object(s) => &s.options,
            Self::Array(s) => &s.options,
            Self::Pick(s) => &s.derived.options,
            Self::Unsafe(s) => &s.options,
        }
    }

    /// Per-node message override, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.options().error_message.as_deref()
    }

    /// The object view of an `Object` or `Pick` node.
    pub fn as_object(&self) -> Option<&ObjectSchema> {
        match self {
            Self::Object(s) => Some(s),
            Self::Pick(s) => Some(&s.derived),
            _ => None,
        }
    }
}

impl std::fmt::Display for Schema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}
