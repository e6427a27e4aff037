//! Lazy pre-order walk over a schema/value pair.

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::ops::Deref;
use std::sync::Arc;

use super::error::{ErrorParameters, ErrorType, ValidationError};
use super::path;
use crate::context::ValidationContext;
use crate::schema::*;
use crate::value::Value;

/// Stand-in for the value of an absent property.
static UNDEFINED: Value = Value::Undefined;

pub(crate) enum ContextRef<'a> {
    Borrowed(&'a ValidationContext),
    Shared(Arc<ValidationContext>),
}

impl Deref for ContextRef<'_> {
    type Target = ValidationContext;

    fn deref(&self) -> &ValidationContext {
        match self {
            ContextRef::Borrowed(ctx) => ctx,
            ContextRef::Shared(ctx) => ctx,
        }
    }
}

enum Step<'a> {
    Visit {
        schema: &'a Schema,
        value: &'a Value,
        path: String,
    },
    Missing {
        schema: &'a Schema,
        path: String,
    },
}

/// Iterator over every violation of a value against a schema.
///
/// Errors come out in pre-order: a node's own errors first, then its
/// children in declaration (object) or index (array) order. Nothing is
/// cached; build a new iterator to walk again.
pub struct Errors<'a> {
    ctx: ContextRef<'a>,
    stack: Vec<Step<'a>>,
    pending: VecDeque<ValidationError<'a>>,
}

impl<'a> Errors<'a> {
    pub(crate) fn new(ctx: ContextRef<'a>, schema: &'a Schema, value: &'a Value) -> Self {
        Self {
            ctx,
            stack: vec![Step::Visit {
                schema,
                value,
                path: String::new(),
            }],
            pending: VecDeque::new(),
        }
    }

    fn emit(&mut self, error_type: ErrorType, schema: &'a Schema, value: &'a Value, path: &str) {
        let message = self.ctx.render(&ErrorParameters {
            error_type,
            path,
            schema,
            value,
        });
        self.pending.push_back(ValidationError {
            error_type,
            path: path.to_string(),
            schema,
            value,
            message,
        });
    }

    fn visit(&mut self, step: Step<'a>) {
        match step {
            Step::Missing { schema, path } => {
                self.emit(ErrorType::ObjectRequiredProperty, schema, &UNDEFINED, &path);
            }
            Step::Visit {
                schema,
                value,
                path,
            } => match schema {
                Schema::Primitive(p) => self.visit_primitive(p, schema, value, &path),
                Schema::Object(o) => self.visit_object(o, schema, value, &path),
                Schema::Pick(p) => self.visit_object(&p.derived, schema, value, &path),
                Schema::Array(a) => self.visit_array(a, schema, value, &path),
                Schema::Unsafe(u) => self.visit_unsafe(u, schema, value, &path),
            },
        }
    }

    fn visit_primitive(&mut self, p: &'a PrimitiveSchema, schema: &'a Schema, value: &'a Value, path: &str) {
        if !p.kind.accepts(value) {
            self.emit(ErrorType::Type, schema, value, path);
            return;
        }
        let c = p.constraints();
        match value {
            Value::String(s) if p.kind == PrimitiveKind::String => {
                let len = s.chars().count();
                if c.min_length.is_some_and(|min| len < min) {
                    self.emit(ErrorType::StringMinLength, schema, value, path);
                }
                if c.max_length.is_some_and(|max| len > max) {
                    self.emit(ErrorType::StringMaxLength, schema, value, path);
                }
                if c.pattern.as_ref().is_some_and(|re| !re.is_match(s)) {
                    self.emit(ErrorType::StringPattern, schema, value, path);
                }
                if let Some(format) = p.format() {
                    let outcome = match self.ctx.formats().resolve(format) {
                        Err(_) => Some(ErrorType::UnregisteredFormat),
                        Ok(check) => (!check(s.as_str())).then_some(ErrorType::Format),
                    };
                    if let Some(error_type) = outcome {
                        self.emit(error_type, schema, value, path);
                    }
                }
            }
            Value::Number(n) if matches!(p.kind, PrimitiveKind::Number | PrimitiveKind::Integer) => {
                let n = *n;
                let checks = [
                    (c.minimum.is_some_and(|m| n < m), ErrorType::NumberMinimum),
                    (c.maximum.is_some_and(|m| n > m), ErrorType::NumberMaximum),
                    (c.exclusive_minimum.is_some_and(|m| n <= m), ErrorType::NumberExclusiveMinimum),
                    (c.exclusive_maximum.is_some_and(|m| n >= m), ErrorType::NumberExclusiveMaximum),
                    (
                        c.multiple_of
                            .filter(|m| m.is_finite() && *m > 0.0)
                            .is_some_and(|m| n % m != 0.0),
                        ErrorType::NumberMultipleOf,
                    ),
                ];
                for (failed, error_type) in checks {
                    if failed {
                        self.emit(error_type, schema, value, path);
                    }
                }
            }
            Value::Date(d) if p.kind == PrimitiveKind::Date => {
                let ts = d.timestamp_millis();
                if c.minimum_timestamp.is_some_and(|m| ts < m) {
                    self.emit(ErrorType::DateMinimumTimestamp, schema, value, path);
                }
                if c.maximum_timestamp.is_some_and(|m| ts > m) {
                    self.emit(ErrorType::DateMaximumTimestamp, schema, value, path);
                }
            }
            _ => {}
        }
    }

    fn visit_object(&mut self, object: &'a ObjectSchema, schema: &'a Schema, value: &'a Value, path: &str) {
        let Some(entries) = value.as_object() else {
            self.emit(ErrorType::Type, schema, value, path);
            return;
        };
        // Undeclared keys in `entries` are never looked at.
        let mut children = Vec::with_capacity(object.properties.len());
        for (key, property) in &object.properties {
            let child_path = path::child_key(path, key);
            match entries.get(key).filter(|v| !v.is_undefined()) {
                Some(v) => children.push(Step::Visit {
                    schema: &property.schema,
                    value: v,
                    path: child_path,
                }),
                None if !property.optional => children.push(Step::Missing {
                    schema: &property.schema,
                    path: child_path,
                }),
                None => {}
            }
        }
        self.stack.extend(children.into_iter().rev());
    }

    fn visit_array(&mut self, array: &'a ArraySchema, schema: &'a Schema, value: &'a Value, path: &str) {
        let Some(items) = value.as_array() else {
            self.emit(ErrorType::Type, schema, value, path);
            return;
        };
        let c = &array.options.constraints;
        if c.min_items.is_some_and(|min| items.len() < min) {
            self.emit(ErrorType::ArrayMinItems, schema, value, path);
        }
        if c.max_items.is_some_and(|max| items.len() > max) {
            self.emit(ErrorType::ArrayMaxItems, schema, value, path);
        }
        let element: &'a Schema = &array.element;
        self.stack
            .extend(items.iter().enumerate().rev().map(move |(i, item)| Step::Visit {
                schema: element,
                value: item,
                path: path::child_index(path, i),
            }));
    }

    fn visit_unsafe(&mut self, node: &'a UnsafeSchema, schema: &'a Schema, value: &'a Value, path: &str) {
        let outcome = match self.ctx.types().resolve(node.kind.name()) {
            Err(_) => Some(ErrorType::UnregisteredKind),
            Ok(check) => (!check(node, value)).then_some(ErrorType::Custom),
        };
        if let Some(error_type) = outcome {
            self.emit(error_type, schema, value, path);
        }
    }
}

impl<'a> Iterator for Errors<'a> {
    type Item = ValidationError<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(error) = self.pending.pop_front() {
                return Some(error);
            }
            let step = self.stack.pop()?;
            self.visit(step);
        }
    }
}

impl FusedIterator for Errors<'_> {}
