//! Integration tests for the validation engine.

use propguard::{ErrorType, Schema, SchemaOptions, ValidationContext, Value, T};
use serde_json::json;

const ID: &str = "507f1f77bcf86cd799439011";

fn ctx() -> ValidationContext {
    ValidationContext::new()
}

fn user() -> Schema {
    T.Object(
        vec![
            T.Key("id", T.ObjectId(None)),
            T.Key("name", T.str()),
            T.Key("createdAt", T.Date(None)),
            T.Key("title", T.str()),
        ],
        None,
    )
    .unwrap()
}

/// (path, error type) for every error, in order.
fn summary(ctx: &ValidationContext, schema: &Schema, value: &Value) -> Vec<(String, ErrorType)> {
    ctx.errors(schema, value)
        .map(|e| (e.path, e.error_type))
        .collect()
}

fn messages(ctx: &ValidationContext, schema: &Schema, value: &Value) -> Vec<String> {
    ctx.errors(schema, value).map(|e| e.message).collect()
}

// ── Primitives ──────────────────────────────────────────────────────────────

#[test]
fn primitive_type_matrix() {
    let c = ctx();
    let cases: Vec<(Schema, Value, bool)> = vec![
        (T.str(), Value::from("x"), true),
        (T.str(), Value::from(1), false),
        (T.num(), Value::from(1.5), true),
        (T.num(), Value::Number(f64::NAN), false),
        (T.num(), Value::from("1"), false),
        (T.Integer(None), Value::from(3), true),
        (T.Integer(None), Value::from(3.5), false),
        (T.bool(), Value::from(false), true),
        (T.bool(), Value::Null, false),
        (T.Null(None), Value::Null, true),
        (T.Null(None), Value::Undefined, false),
        (T.Date(None), Value::from(chrono::Utc::now()), true),
        (T.Date(None), Value::from("2024-01-01"), false),
        (T.Function(None), Value::function("onClick"), true),
        (T.Function(None), Value::from("onClick"), false),
        (T.any(), Value::Undefined, true),
    ];
    for (schema, value, valid) in cases {
        assert_eq!(c.check(&schema, &value), valid, "{schema} vs {value:?}");
    }
}

#[test]
fn type_error_carries_node_and_value() {
    let c = ctx();
    let schema = T.str();
    let value = Value::from(7);
    let errors: Vec<_> = c.errors(&schema, &value).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].path, "");
    assert_eq!(errors[0].error_type, ErrorType::Type);
    assert_eq!(errors[0].value, &value);
    assert_eq!(errors[0].message, "Expected string not 7");
}

#[test]
fn string_constraints_each_report() {
    let c = ctx();
    let schema = T.String(Some(
        SchemaOptions::new()
            .min_length(5)
            .pattern("^[a-z]+$")
            .unwrap(),
    ));
    assert_eq!(
        summary(&c, &schema, &Value::from("AB")),
        vec![
            (String::new(), ErrorType::StringMinLength),
            (String::new(), ErrorType::StringPattern),
        ]
    );
    assert!(c.check(&schema, &Value::from("abcdef")));
}

#[test]
fn constraints_skipped_after_type_mismatch() {
    let c = ctx();
    let schema = T.String(Some(SchemaOptions::new().min_length(5).format("date")));
    assert_eq!(
        summary(&c, &schema, &Value::from(1)),
        vec![(String::new(), ErrorType::Type)]
    );
}

#[test]
fn number_constraints() {
    let c = ctx();
    let schema = T.Number(Some(
        SchemaOptions::new()
            .minimum(0.0)
            .exclusive_maximum(10.0)
            .multiple_of(2.0),
    ));
    assert!(c.check(&schema, &Value::from(4)));
    assert_eq!(
        summary(&c, &schema, &Value::from(-1)),
        vec![
            (String::new(), ErrorType::NumberMinimum),
            (String::new(), ErrorType::NumberMultipleOf),
        ]
    );
    assert_eq!(
        summary(&c, &schema, &Value::from(10)),
        vec![(String::new(), ErrorType::NumberExclusiveMaximum)]
    );
}

#[test]
fn non_positive_multiple_of_is_ignored() {
    let c = ctx();
    for divisor in [0.0, -2.0, f64::NAN] {
        let schema = T.Number(Some(SchemaOptions::new().multiple_of(divisor)));
        assert!(c.check(&schema, &Value::from(0)), "multiple_of({divisor})");
        assert!(c.check(&schema, &Value::from(3)), "multiple_of({divisor})");
    }
}

#[test]
fn date_timestamp_bounds() {
    use chrono::TimeZone;
    let c = ctx();
    let schema = T.Date(Some(SchemaOptions::new().minimum_timestamp(10)));
    let early = Value::from(chrono::Utc.timestamp_millis_opt(5).unwrap());
    let late = Value::from(chrono::Utc.timestamp_millis_opt(10).unwrap());
    assert_eq!(
        summary(&c, &schema, &early),
        vec![(String::new(), ErrorType::DateMinimumTimestamp)]
    );
    assert!(c.check(&schema, &late));
}

// ── Formats ─────────────────────────────────────────────────────────────────

#[test]
fn date_format_scenarios() {
    let c = ctx();
    let schema = T.String(Some(SchemaOptions::new().format("date")));
    assert!(c.check(&schema, &Value::from("2024-01-15")));
    assert_eq!(
        summary(&c, &schema, &Value::from("2024-02-30")),
        vec![(String::new(), ErrorType::Format)]
    );
    // Valid date-time, wrong format: one error plus a logged advisory.
    assert_eq!(
        summary(&c, &schema, &Value::from("2024-01-15T00:00:00Z")),
        vec![(String::new(), ErrorType::Format)]
    );
    assert_eq!(
        messages(&c, &schema, &Value::from("2024-02-30")),
        vec!["Expected string to match 'date' format not 2024-02-30"]
    );
}

#[test]
fn date_time_format() {
    let c = ctx();
    let schema = T.String(Some(SchemaOptions::new().format("date-time")));
    assert!(c.check(&schema, &Value::from("2024-01-15T10:00:00.5+01:00")));
    assert!(!c.check(&schema, &Value::from("soon")));
}

#[test]
fn unregistered_format_is_a_validation_error() {
    let c = ctx();
    let schema = T.String(Some(SchemaOptions::new().format("email")));
    let email = Value::from("a@b.c");
    let errors: Vec<_> = c.errors(&schema, &email).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error_type, ErrorType::UnregisteredFormat);
    assert_eq!(errors[0].message, "Unknown format 'email' not a@b.c");
}

// ── Unsafe kinds ────────────────────────────────────────────────────────────

#[test]
fn object_id_scenario() {
    let c = ctx();
    let schema = T
        .Object(vec![T.Key("id", T.ObjectId(None)), T.Key("name", T.str())], None)
        .unwrap();
    let value = Value::from(json!({"id": "not-an-id", "name": "Ann"}));
    assert_eq!(
        summary(&c, &schema, &value),
        vec![("/id".to_string(), ErrorType::Custom)]
    );
    assert_eq!(
        messages(&c, &schema, &value),
        vec!["Expected kind 'ObjectId' not not-an-id"]
    );
}

#[test]
fn numeric_value_scenarios() {
    let c = ctx();
    let schema = T.NumericValue(None);
    assert!(c.check(&schema, &Value::from("42")));
    assert!(c.check(&schema, &Value::from(0)));
    assert_eq!(
        summary(&c, &schema, &Value::from("abc")),
        vec![(String::new(), ErrorType::Custom)]
    );
    assert_eq!(
        summary(&c, &schema, &Value::Number(f64::NAN)),
        vec![(String::new(), ErrorType::Custom)]
    );
    assert_eq!(
        messages(&c, &schema, &Value::Number(f64::NAN)),
        vec!["Expected kind 'NumericValue' not NaN"]
    );
}

#[test]
fn react_node_default_and_host_capability() {
    let component = Value::host("Greeting", json!({"props": {}}));
    let schema = T.ReactNode(None);

    let narrow = ctx();
    assert!(narrow.check(&schema, &Value::Null));
    assert!(narrow.check(&schema, &Value::from("child")));
    assert!(!narrow.check(&schema, &component));

    let ui = ctx().with_renderable(|h| h.class == "Greeting");
    assert!(ui.check(&schema, &component));
    assert!(!ui.check(&schema, &Value::Bool(true)));
}

#[test]
fn unregistered_kind_degrades_to_error() {
    let c = ValidationContext::empty();
    let schema = T.ObjectId(None);
    let id = Value::from(ID);
    let errors: Vec<_> = c.errors(&schema, &id).collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].error_type, ErrorType::UnregisteredKind);
    assert_eq!(errors[0].message, format!("Unknown kind 'ObjectId' not {ID}"));
}

#[test]
fn custom_kind_sees_node_options() {
    let mut c = ctx();
    c.register_type("MaxLen", |node, value| {
        let max = node.options.extra.get("max").and_then(|m| m.as_u64()).unwrap_or(0);
        value.as_str().is_some_and(|s| s.len() as u64 <= max)
    });
    let schema = T.Custom("MaxLen", Some(SchemaOptions::new().meta("max", 3)));
    assert!(c.check(&schema, &Value::from("abc")));
    assert!(!c.check(&schema, &Value::from("abcd")));
}

// ── Objects, arrays, picks ──────────────────────────────────────────────────

#[test]
fn missing_required_property() {
    let c = ctx();
    let value = Value::from(json!({"id": ID, "createdAt": null, "title": "t"}));
    let schema = user();
    let errors: Vec<_> = c.errors(&schema, &value).collect();
    let missing: Vec<_> = errors
        .iter()
        .filter(|e| e.error_type == ErrorType::ObjectRequiredProperty)
        .collect();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].path, "/name");
    assert_eq!(missing[0].message, "is missing");
    assert_eq!(missing[0].value, &Value::Undefined);
}

#[test]
fn undefined_property_counts_as_missing() {
    let c = ctx();
    let schema = T.Object(vec![T.Key("a", T.str())], None).unwrap();
    let value = Value::object([("a", Value::Undefined)]);
    assert_eq!(
        summary(&c, &schema, &value),
        vec![("/a".to_string(), ErrorType::ObjectRequiredProperty)]
    );
}

#[test]
fn optional_property_checked_only_when_present() {
    let c = ctx();
    let schema = T
        .Object(vec![T.KeyOpt("nick", T.str())], None)
        .unwrap();
    assert!(c.check(&schema, &Value::from(json!({}))));
    assert_eq!(
        summary(&c, &schema, &Value::from(json!({"nick": 1}))),
        vec![("/nick".to_string(), ErrorType::Type)]
    );
}

#[test]
fn non_object_value_is_type_error() {
    let c = ctx();
    assert_eq!(
        summary(&c, &user(), &Value::from(json!([1]))),
        vec![(String::new(), ErrorType::Type)]
    );
    assert_eq!(
        messages(&c, &T.Array(T.str(), None), &Value::from(json!({"a": 1}))),
        vec![r#"Expected array not {"a":1}"#]
    );
}

#[test]
fn extra_keys_are_ignored() {
    let c = ctx();
    let mut value = Value::from(json!({
        "id": ID, "name": "Ann", "title": "Dr",
        "unknown": {"deep": [1, 2, 3]}
    }));
    if let Value::Object(o) = &mut value {
        o.insert("createdAt".into(), Value::from(chrono::Utc::now()));
    }
    assert!(c.check(&user(), &value));
}

#[test]
fn errors_follow_pre_order() {
    let c = ctx();
    let schema = T
        .Object(
            vec![
                T.Key("a", T.str()),
                T.Key(
                    "list",
                    T.Array(
                        T.Object(vec![T.Key("x", T.num()), T.Key("y", T.num())], None)
                            .unwrap(),
                        None,
                    ),
                ),
                T.Key("b", T.str()),
                T.Key("c", T.NumericValue(None)),
            ],
            None,
        )
        .unwrap();
    let value = Value::from(json!({
        "a": 1,
        "list": [{"x": "1"}, {"x": 1, "y": 2}, 5],
        "c": "nope"
    }));
    assert_eq!(
        summary(&c, &schema, &value),
        vec![
            ("/a".to_string(), ErrorType::Type),
            ("/list/0/x".to_string(), ErrorType::Type),
            ("/list/0/y".to_string(), ErrorType::ObjectRequiredProperty),
            ("/list/2".to_string(), ErrorType::Type),
            ("/b".to_string(), ErrorType::ObjectRequiredProperty),
            ("/c".to_string(), ErrorType::Custom),
        ]
    );
}

#[test]
fn array_item_bounds_precede_elements() {
    let c = ctx();
    let schema = T.Array(T.str(), Some(SchemaOptions::new().max_items(1)));
    assert_eq!(
        summary(&c, &schema, &Value::from(json!(["a", 2]))),
        vec![
            (String::new(), ErrorType::ArrayMaxItems),
            ("/1".to_string(), ErrorType::Type),
        ]
    );
}

#[test]
fn pick_checks_only_selected_keys() {
    let c = ctx();
    let picked = T.Pick(&user(), ["id", "name"], None).unwrap();
    let value = Value::from(json!({
        "id": ID,
        "name": "Ann",
        "createdAt": "not a date",
        "title": 42
    }));
    assert!(c.check(&picked, &value));
    assert_eq!(c.errors(&picked, &value).count(), 0);

    let missing = Value::from(json!({"createdAt": "x"}));
    assert_eq!(
        summary(&c, &picked, &missing),
        vec![
            ("/id".to_string(), ErrorType::ObjectRequiredProperty),
            ("/name".to_string(), ErrorType::ObjectRequiredProperty),
        ]
    );
}

#[test]
fn pick_keeps_object_level_override() {
    let c = ctx();
    let source = T
        .Object(
            vec![T.Key("id", T.ObjectId(None)), T.Key("name", T.str())],
            Some(SchemaOptions::new().error_message("bad user")),
        )
        .unwrap();
    let picked = T.Pick(&source, ["id"], None).unwrap();
    let not_an_object = Value::from(1);
    assert_eq!(messages(&c, &source, &not_an_object), vec!["bad user"]);
    assert_eq!(messages(&c, &picked, &not_an_object), vec!["bad user"]);

    let renamed = T
        .Pick(&source, ["id"], Some(SchemaOptions::new().error_message("bad ref")))
        .unwrap();
    assert_eq!(messages(&c, &renamed, &not_an_object), vec!["bad ref"]);
}

#[test]
fn nested_shipment_schema() {
    let c = ctx();
    let shipment = T
        .Object(
            vec![
                T.Key("id", T.ObjectId(None)),
                T.Key(
                    "sub",
                    T.Object(
                        vec![T.Key(
                            "array",
                            T.Array(T.Pick(&user(), ["id", "name", "createdAt"], None).unwrap(), None),
                        )],
                        None,
                    )
                    .unwrap(),
                ),
            ],
            None,
        )
        .unwrap();
    let value = Value::object([
        ("id", Value::from(ID)),
        (
            "sub",
            Value::object([(
                "array",
                Value::Array(vec![Value::object([
                    ("id", Value::from("zzz")),
                    ("name", Value::from("John Doe")),
                ])]),
            )]),
        ),
    ]);
    assert_eq!(
        summary(&c, &shipment, &value),
        vec![
            ("/sub/array/0/id".to_string(), ErrorType::Custom),
            ("/sub/array/0/createdAt".to_string(), ErrorType::ObjectRequiredProperty),
        ]
    );
}

#[test]
fn keys_with_slashes_are_escaped() {
    let c = ctx();
    let schema = T.Object(vec![T.Key("a/b", T.str())], None).unwrap();
    assert_eq!(
        summary(&c, &schema, &Value::from(json!({}))),
        vec![("/a~1b".to_string(), ErrorType::ObjectRequiredProperty)]
    );
}

// ── Messages ────────────────────────────────────────────────────────────────

#[test]
fn error_message_override_applies_to_every_error_at_node() {
    let c = ctx();
    let schema = T
        .Object(
            vec![
                T.Key("clickedAt", T.Date(Some(SchemaOptions::new().error_message("abc")))),
                T.Key(
                    "code",
                    T.String(Some(
                        SchemaOptions::new()
                            .error_message("bad code")
                            .min_length(3)
                            .pattern("^[0-9]+$")
                            .unwrap(),
                    )),
                ),
            ],
            None,
        )
        .unwrap();
    assert_eq!(
        messages(&c, &schema, &Value::from(json!({"clickedAt": 5, "code": "x"}))),
        vec!["abc", "bad code", "bad code"]
    );
    // The override beats "is missing" too.
    assert_eq!(messages(&c, &schema, &Value::from(json!({"code": "123"}))), vec!["abc"]);
}

#[test]
fn replaced_error_function_is_used() {
    let mut c = ctx();
    c.set_error_function(|e| format!("{}@{}", e.error_type, e.path));
    let schema = T.Object(vec![T.Key("a", T.str()), T.Key("b", T.num())], None).unwrap();
    assert_eq!(
        messages(&c, &schema, &Value::from(json!({"b": "x"}))),
        vec!["ObjectRequiredProperty@/a", "Type@/b"]
    );
}

#[test]
fn errors_are_restartable() {
    let c = ctx();
    let value = Value::from(json!({"id": 1, "title": null}));
    let schema = user();
    let first = summary(&c, &schema, &value);
    let second = summary(&c, &schema, &value);
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn registry_override_affects_existing_schemas() {
    let mut c = ctx();
    let schema = T.Object(vec![T.Key("id", T.ObjectId(None))], None).unwrap();
    let value = Value::from(json!({"id": "anything"}));
    assert!(!c.check(&schema, &value));
    c.register_type("ObjectId", |_, v| v.as_str().is_some());
    assert!(c.check(&schema, &value));
}

#[test]
fn schemas_are_shareable_across_threads() {
    let c = std::sync::Arc::new(ctx());
    let schema = std::sync::Arc::new(user());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let c = c.clone();
            let schema = schema.clone();
            std::thread::spawn(move || {
                let value = Value::from(json!({"id": i}));
                let count = c.errors(&schema, &value).count();
                count
            })
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 4);
    }
}
