//! Object Validation Tests
//!
//! End-to-end checks of the public API:
//! - Valid objects are returned restricted to the schema's fields
//! - The first violated constraint is reported
//! - Builders finalize deterministically

use objcheck::{
    boolean, number, string, validate_object, validate_value, FieldType, Schema, Validation,
    ValidationErrorKind,
};
use regex::Regex;
use serde_json::{json, Map, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn user_schema() -> Schema {
    Schema::new()
        .field("name", string().min(2).max(20).required())
        .field("age", number().min(18).max(99))
        .field("isStudent", boolean().required())
}

fn email_schema() -> Schema {
    Schema::new().field(
        "email",
        string().pattern(
            Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$").unwrap(),
        ),
    )
}

fn error_message(schema: &Schema, input: Value) -> String {
    validate_value(schema, &input).unwrap_err().to_string()
}

// =============================================================================
// Scenarios
// =============================================================================

/// A fully valid object is returned unchanged.
#[test]
fn test_valid_user_accepted() {
    let input = json!({ "name": "John", "age": 25, "isStudent": true });
    let accepted = validate_value(&user_schema(), &input).unwrap();

    assert_eq!(Value::Object(accepted), input);
}

/// A missing required field is reported by name.
#[test]
fn test_missing_name_rejected() {
    let err = error_message(&user_schema(), json!({ "age": 25, "isStudent": true }));
    assert!(err.contains("'name' is required."));
}

/// An email that does not match the pattern is rejected.
#[test]
fn test_invalid_email_rejected() {
    let err = error_message(&email_schema(), json!({ "email": "invalid-email" }));
    assert!(err.contains("'email' does not match the pattern."));
}

/// A well-formed email passes the pattern.
#[test]
fn test_valid_email_accepted() {
    let input = json!({ "email": "jane_doe@mail.example.org" });
    assert!(validate_value(&email_schema(), &input).is_ok());
}

// =============================================================================
// Constraint Messages
// =============================================================================

/// Strings shorter than the minimum length fail.
#[test]
fn test_string_min_length_message() {
    let schema = Schema::new().field("nick", string().min(2));
    let err = error_message(&schema, json!({ "nick": "a" }));
    assert!(err.contains("'nick' must be at least 2 characters."));
}

/// Numbers below the minimum fail.
#[test]
fn test_number_min_message() {
    let schema = Schema::new().field("age", number().min(18));
    let err = error_message(&schema, json!({ "age": 17 }));
    assert!(err.contains("'age' must be at least 18."));
}

/// A false custom predicate fails.
#[test]
fn test_custom_predicate_message() {
    let schema = Schema::new().field("password", string().validate(|v| v != "password"));
    let err = error_message(&schema, json!({ "password": "password" }));
    assert!(err.contains("Custom validation for 'password' did not pass."));
}

/// Each failure maps to its category.
#[test]
fn test_error_kinds() {
    let cases = [
        (json!({ "isStudent": true }), ValidationErrorKind::MissingRequiredField),
        (json!({ "name": true, "isStudent": true }), ValidationErrorKind::TypeMismatch),
        (json!({ "name": "J", "isStudent": true }), ValidationErrorKind::LengthOutOfRange),
        (
            json!({ "name": "John", "age": 120, "isStudent": true }),
            ValidationErrorKind::ValueOutOfRange,
        ),
    ];

    for (input, kind) in cases {
        let err = validate_value(&user_schema(), &input).unwrap_err();
        assert_eq!(err.kind(), kind, "input {}", input);
    }
}

// =============================================================================
// Output Shape
// =============================================================================

/// Only schema fields are copied to the output.
#[test]
fn test_output_restricted_to_schema_fields() {
    let input = json!({ "name": "John", "isStudent": false, "role": "admin" });
    let accepted = validate_value(&user_schema(), &input).unwrap();

    let mut expected = Map::new();
    expected.insert("name".into(), json!("John"));
    expected.insert("isStudent".into(), json!(false));
    assert_eq!(accepted, expected);
}

/// Values are never coerced.
#[test]
fn test_no_coercion() {
    let err = error_message(&user_schema(), json!({ "name": "John", "age": "25", "isStudent": true }));
    assert_eq!(err, "'age' must be of type 'number'.");
}

/// The result serializes to exactly one of the two shapes.
#[test]
fn test_result_shapes_are_exclusive() {
    let schema = user_schema();
    let inputs = [
        json!({ "name": "John", "isStudent": true }),
        json!({ "name": "John" }),
    ];

    for input in inputs {
        let outcome: Validation = validate_value(&schema, &input).into();
        let wire = serde_json::to_value(&outcome).unwrap();
        let obj = wire.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("value") != obj.contains_key("error"));
    }
}

/// Validating the same input twice gives the same answer.
#[test]
fn test_validation_is_deterministic() {
    let schema = user_schema();
    let input: Map<String, Value> = json!({ "name": "J", "age": 10, "isStudent": "no" })
        .as_object()
        .cloned()
        .unwrap();

    let first = validate_object(&schema, &input);
    let second = validate_object(&schema, &input);
    assert_eq!(first, second);
    assert_eq!(first.unwrap_err().field(), "name");
}

// =============================================================================
// Builder Behavior
// =============================================================================

/// Finalizing repeatedly yields identical definitions.
#[test]
fn test_finalize_idempotent() {
    let builder = string().min(2).max(20).required().validate(|v| v.is_string());
    assert_eq!(builder.finalize(), builder.finalize());
}

/// Bounds and patterns on a boolean field are ignored.
#[test]
fn test_boolean_constraints_ignored() {
    let schema = Schema::new().field(
        "flag",
        boolean().min(10).pattern(Regex::new("^never$").unwrap()).required(),
    );

    let def = schema.get("flag").unwrap().finalize();
    assert_eq!(def.field_type(), FieldType::Boolean);
    assert!(validate_value(&schema, &json!({ "flag": true })).is_ok());
}

/// String length bounds render as whole counts even when given fractions.
#[test]
fn test_fractional_string_bound_message() {
    let schema = Schema::new().field("code", string().min(1.5).required());
    assert_eq!(
        error_message(&schema, json!({ "code": "a" })),
        "'code' must be at least 2 characters."
    );
}

/// An emoji is a single character for length bounds.
#[test]
fn test_astral_character_counts_once() {
    let schema = Schema::new().field("icon", string().min(1).max(1));
    assert!(validate_value(&schema, &json!({ "icon": "😀" })).is_ok());
}

// =============================================================================
// Library Surface
// =============================================================================

/// Schemas are assembled and checked purely in memory through the schema module.
#[test]
fn test_schema_module_surface() {
    use objcheck::schema::{validate_value, FieldBuilder, FieldDef, Schema, Validation};

    let schema: Schema = vec![
        ("id", FieldBuilder::new(FieldType::Number).required()),
        ("label", FieldBuilder::new(FieldType::String).max(8)),
    ]
    .into_iter()
    .collect();

    assert!(matches!(schema.get("label").unwrap().finalize(), FieldDef::String(_)));

    let accepted = Validation::from(validate_value(&schema, &json!({ "id": 7, "x": 1 })));
    assert_eq!(serde_json::to_value(&accepted).unwrap(), json!({ "value": { "id": 7 } }));

    let rejected = Validation::from(validate_value(&schema, &json!({ "label": "ok" })));
    assert_eq!(
        serde_json::to_value(&rejected).unwrap(),
        json!({ "error": "'id' is required." })
    );
}
