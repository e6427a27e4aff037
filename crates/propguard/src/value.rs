//! [`Value`], the runtime value model checked against schemas.
//!
//! Covers the values a host hands to the validator, which is more than JSON:
//! - JSON primitives (null, bool, numbers, strings, arrays, objects)
//! - `undefined` (an absent value, e.g. a missing property)
//! - NaN and infinite numbers
//! - Date instants
//! - callables and opaque host objects

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;

/// Handle standing in for a host callable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Callable {
    pub name: String,
}

/// Opaque object owned by the host runtime (e.g. a UI component instance).
///
/// The validator never looks inside; it only hands the object to host
/// supplied capability checks such as the renderable predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct HostObject {
    /// Host-side class or constructor name.
    pub class: String,
    /// Serializable snapshot, used for diagnostics only.
    pub payload: serde_json::Value,
}

/// A runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    /// Any number, NaN and infinities included.
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<Value>),
    /// Object (insertion-ordered key-value pairs)
    Object(IndexMap<String, Value>),
    Function(Callable),
    Host(HostObject),
}

impl Value {
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(Callable { name: name.into() })
    }

    pub fn host(class: impl Into<String>, payload: serde_json::Value) -> Self {
        Value::Host(HostObject {
            class: class.into(),
            payload,
        })
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Property lookup that treats an `Undefined` entry as absent.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()
            .and_then(|o| o.get(key))
            .filter(|v| !v.is_undefined())
    }

    /// Short type label used in diagnostics.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "Date",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
            Value::Function(_) => "function",
            Value::Host(h) => &h.class,
        }
    }

    /// Converts to JSON the way `JSON.stringify` would.
    ///
    /// Returns `None` for values JSON cannot hold at the top level
    /// (`undefined`, callables). Inside arrays those become `null`; inside
    /// objects the entry is dropped.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        use serde_json::Value as Json;
        match self {
            Value::Undefined | Value::Function(_) => None,
            Value::Null => Some(Json::Null),
            Value::Bool(b) => Some(Json::Bool(*b)),
            Value::Number(n) => Some(number_to_json(*n)),
            Value::String(s) => Some(Json::String(s.clone())),
            Value::Date(d) => Some(Json::String(
                d.to_rfc3339_opts(SecondsFormat::Millis, true),
            )),
            Value::Array(items) => Some(Json::Array(
                items
                    .iter()
                    .map(|v| v.to_json().unwrap_or(Json::Null))
                    .collect(),
            )),
            Value::Object(entries) => Some(Json::Object(
                entries
                    .iter()
                    .filter_map(|(k, v)| v.to_json().map(|j| (k.clone(), j)))
                    .collect(),
            )),
            Value::Host(h) => Some(h.payload.clone()),
        }
    }

    /// Short textual form used when naming an offending value in a message.
    ///
    /// `null` and `undefined` are spelled out, scalars print as-is, strings
    /// are used verbatim and composites are JSON-stringified.
    pub fn quick_repr(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::String(s) => s.clone(),
            Value::Function(f) => format!("[function {}]", f.name),
            _ => self
                .to_json()
                .and_then(|j| serde_json::to_string(&j).ok())
                .unwrap_or_default(),
        }
    }
}

/// Integral values inside the safe-integer range serialize without a
/// trailing `.0`; NaN and infinities become `null`.
fn number_to_json(n: f64) -> serde_json::Value {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return serde_json::Value::from(n as i64);
    }
    serde_json::Number::from_f64(n)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if (1e-6..1e21).contains(&n.abs()) {
        n.to_string()
    } else {
        // Shortest round-trip digits in exponent form, with an explicit
        // sign on non-negative exponents: `1e+21`, `1.5e-7`.
        let repr = format!("{n:e}");
        match repr.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => repr,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(arr) => {
                Value::Array(arr.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(obj) => {
                Value::Object(obj.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Value::Date(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}
