//! Schema builder: fluent constructors for every node kind.

use indexmap::IndexMap;

use super::options::SchemaOptions;
use super::schema::*;
use crate::error::SchemaError;

/// One property entry passed to [`SchemaBuilder::Object`].
#[derive(Debug, Clone)]
pub struct Key {
    pub name: String,
    pub property: Property,
}

/// Builder for constructing schema nodes.
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder;

#[allow(non_snake_case)]
impl SchemaBuilder {
    pub fn new() -> Self {
        Self
    }

    // ------------------------------------------------------------------
    // Shorthand accessors (no options)

    pub fn str(&self) -> Schema {
        self.String(None)
    }

    pub fn num(&self) -> Schema {
        self.Number(None)
    }

    pub fn bool(&self) -> Schema {
        self.Boolean(None)
    }

    pub fn any(&self) -> Schema {
        self.Any(None)
    }

    // ------------------------------------------------------------------
    // Primitives

    pub fn String(&self, options: Option<SchemaOptions>) -> Schema {
        primitive(PrimitiveKind::String, options)
    }

    pub fn Number(&self, options: Option<SchemaOptions>) -> Schema {
        primitive(PrimitiveKind::Number, options)
    }

    pub fn Integer(&self, options: Option<SchemaOptions>) -> Schema {
        primitive(PrimitiveKind::Integer, options)
    }

    pub fn Boolean(&self, options: Option<SchemaOptions>) -> Schema {
        primitive(PrimitiveKind::Boolean, options)
    }

    pub fn Null(&self, options: Option<SchemaOptions>) -> Schema {
        primitive(PrimitiveKind::Null, options)
    }

    pub fn Date(&self, options: Option<SchemaOptions>) -> Schema {
        primitive(PrimitiveKind::Date, options)
    }

    pub fn Function(&self, options: Option<SchemaOptions>) -> Schema {
        primitive(PrimitiveKind::Function, options)
    }

    pub fn Any(&self, options: Option<SchemaOptions>) -> Schema {
        primitive(PrimitiveKind::Any, options)
    }

    // ------------------------------------------------------------------
    // Composites

    pub fn Array(&self, element: Schema, options: Option<SchemaOptions>) -> Schema {
        Schema::Array(ArraySchema {
            element: Box::new(element),
            options: options.unwrap_or_default(),
        })
    }

    /// Builds an object; property names must be unique.
    pub fn Object(&self, keys: Vec<Key>, options: Option<SchemaOptions>) -> Result<Schema, SchemaError> {
        let mut properties = IndexMap::with_capacity(keys.len());
        for Key { name, property } in keys {
            if properties.contains_key(&name) {
                return Err(SchemaError::DuplicateKey(name));
            }
            properties.insert(name, property);
        }
        Ok(Schema::Object(ObjectSchema {
            properties,
            options: options.unwrap_or_default(),
        }))
    }

    /// Required property.
    pub fn Key(&self, name: impl Into<String>, schema: Schema) -> Key {
        Key {
            name: name.into(),
            property: Property {
                schema,
                optional: false,
            },
        }
    }

    /// Optional property.
    pub fn KeyOpt(&self, name: impl Into<String>, schema: Schema) -> Key {
        Key {
            name: name.into(),
            property: Property {
                schema,
                optional: true,
            },
        }
    }

    /// Projects `source` (an `Object` or another `Pick`) onto `keys`.
    ///
    /// The derived object keeps the source's options with `options` applied
    /// on top. Fails with [`SchemaError::UnknownKey`] on the first key the
    /// source does not declare. Repeated keys keep their first position.
    pub fn Pick<K>(&self, source: &Schema, keys: K, options: Option<SchemaOptions>) -> Result<Schema, SchemaError>
    where
        K: IntoIterator,
        K::Item: Into<String>,
    {
        let object = source
            .as_object()
            .ok_or_else(|| SchemaError::NotAnObject(source.kind().to_string()))?;
        let mut properties = IndexMap::new();
        for key in keys {
            let key: String = key.into();
            let property = object
                .properties
                .get(&key)
                .ok_or_else(|| SchemaError::UnknownKey(key.clone()))?;
            if properties.contains_key(&key) {
                continue;
            }
            properties.insert(key, property.clone());
        }
        let options = match options {
            Some(over) => object.options.clone().overlay(over),
            None => object.options.clone(),
        };
        Ok(Schema::Pick(PickSchema {
            derived: ObjectSchema { properties, options },
        }))
    }

    // ------------------------------------------------------------------
    // Registered kinds

    pub fn Unsafe(&self, kind: UnsafeKind, options: Option<SchemaOptions>) -> Schema {
        Schema::Unsafe(UnsafeSchema {
            kind,
            options: options.unwrap_or_default(),
        })
    }

    /// Node of a host-registered kind, looked up by `name`.
    pub fn Custom(&self, name: &str, options: Option<SchemaOptions>) -> Schema {
        self.Unsafe(UnsafeKind::from_name(name), options)
    }

    pub fn ObjectId(&self, options: Option<SchemaOptions>) -> Schema {
        self.Unsafe(UnsafeKind::ObjectId, options)
    }

    pub fn NumericValue(&self, options: Option<SchemaOptions>) -> Schema {
        self.Unsafe(UnsafeKind::NumericValue, options)
    }

    pub fn ReactNode(&self, options: Option<SchemaOptions>) -> Schema {
        self.Unsafe(UnsafeKind::ReactNode, options)
    }
}

fn primitive(kind: PrimitiveKind, options: Option<SchemaOptions>) -> Schema {
    Schema::Primitive(PrimitiveSchema {
        kind,
        options: options.unwrap_or_default(),
    })
}

/// Global default schema builder.
pub static T: SchemaBuilder = SchemaBuilder;
