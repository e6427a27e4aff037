//! JSON projection of schema nodes, used for diagnostics.

use serde_json::{json, Map, Value as Json};

use super::options::SchemaOptions;
use super::schema::*;

impl Schema {
    /// Renders the node in JSON-Schema-like vocabulary.
    pub fn to_json(&self) -> Json {
        let mut out = Map::new();
        match self {
            Schema::Primitive(s) => {
                out.insert("type".into(), json!(s.kind.as_str()));
            }
            Schema::Object(s) => write_object(&mut out, s),
            Schema::Pick(s) => write_object(&mut out, &s.derived),
            Schema::Array(s) => {
                out.insert("type".into(), json!("array"));
                out.insert("items".into(), s.element.to_json());
            }
            Schema::Unsafe(s) => {
                out.insert("kind".into(), json!(s.kind.name()));
            }
        }
        write_options(&mut out, self.options());
        Json::Object(out)
    }
}

fn write_object(out: &mut Map<String, Json>, s: &ObjectSchema) {
    out.insert("type".into(), json!("object"));
    let properties: Map<String, Json> = s
        .properties
        .iter()
        .map(|(k, p)| (k.clone(), p.schema.to_json()))
        .collect();
    out.insert("properties".into(), Json::Object(properties));
    let required: Vec<&str> = s.required().collect();
    if !required.is_empty() {
        out.insert("required".into(), json!(required));
    }
}

fn write_options(out: &mut Map<String, Json>, options: &SchemaOptions) {
    let c = &options.constraints;
    let mut put = |key: &str, value: Option<Json>| {
        if let Some(v) = value {
            out.insert(key.to_string(), v);
        }
    };
    put("format", options.format.as_ref().map(|v| json!(v)));
    put("title", options.title.as_ref().map(|v| json!(v)));
    put("description", options.description.as_ref().map(|v| json!(v)));
    put("errorMessage", options.error_message.as_ref().map(|v| json!(v)));
    put("minLength", c.min_length.map(|v| json!(v)));
    put("maxLength", c.max_length.map(|v| json!(v)));
    put("pattern", c.pattern.as_ref().map(|v| json!(v.as_str())));
    put("minimum", c.minimum.map(|v| json!(v)));
    put("maximum", c.maximum.map(|v| json!(v)));
    put("exclusiveMinimum", c.exclusive_minimum.map(|v| json!(v)));
    put("exclusiveMaximum", c.exclusive_maximum.map(|v| json!(v)));
    put("multipleOf", c.multiple_of.map(|v| json!(v)));
    put("minimumTimestamp", c.minimum_timestamp.map(|v| json!(v)));
    put("maximumTimestamp", c.maximum_timestamp.map(|v| json!(v)));
    put("minItems", c.min_items.map(|v| json!(v)));
    put("maxItems", c.max_items.map(|v| json!(v)));
    for (k, v) in &options.extra {
        out.insert(k.clone(), v.clone());
    }
}
