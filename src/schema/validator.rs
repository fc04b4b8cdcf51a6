//! Object validation against a schema
//!
//! Validation semantics:
//! - Fields are checked in schema declaration order
//! - The first violated constraint ends the whole evaluation
//! - A missing optional field skips every check and is left out of the output
//! - Input fields not declared in the schema are dropped from the output
//! - No coercion, no defaults
//!
//! Per-field check order: required, type, pattern, min length, max length,
//! min value, max value, custom predicate.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::errors::{ValidationError, ValidationResult};
use super::types::{FieldDef, NumberDef, Schema, StringDef};

/// Field name reported when the input itself is not an object
pub const ROOT_FIELD: &str = "$root";

/// Validates `input` against `schema`.
///
/// Returns the accepted object, holding exactly the schema's fields that are
/// present in the input, in declaration order, with values unchanged.
///
/// # Errors
///
/// Returns the first `ValidationError` encountered.
pub fn validate_object(
    schema: &Schema,
    input: &Map<String, Value>,
) -> ValidationResult<Map<String, Value>> {
    match evaluate(schema, input) {
        Ok(accepted) => {
            debug!(fields = accepted.len(), "object accepted");
            Ok(accepted)
        }
        Err(err) => {
            debug!(field = err.field(), code = err.kind().code(), "object rejected");
            Err(err)
        }
    }
}

/// Validates an arbitrary JSON value.
///
/// Anything other than an object is rejected with a type mismatch on
/// [`ROOT_FIELD`].
pub fn validate_value(schema: &Schema, input: &Value) -> ValidationResult<Map<String, Value>> {
    let obj = input.as_object().ok_or_else(|| ValidationError::TypeMismatch {
        field: ROOT_FIELD.to_string(),
        expected: "object",
    })?;
    validate_object(schema, obj)
}

fn evaluate(schema: &Schema, input: &Map<String, Value>) -> ValidationResult<Map<String, Value>> {
    let mut accepted = Map::new();

    for (name, builder) in schema.iter() {
        let def = builder.finalize();

        let Some(value) = input.get(name) else {
            if def.is_required() {
                return Err(ValidationError::MissingRequired {
                    field: name.to_string(),
                });
            }
            continue;
        };

        check_field(name, &def, value)?;
        accepted.insert(name.to_string(), value.clone());
    }

    Ok(accepted)
}

/// Runs every check for a present value.
fn check_field(name: &str, def: &FieldDef, value: &Value) -> ValidationResult<()> {
    let expected = def.field_type();
    if !expected.matches(value) {
        return Err(ValidationError::TypeMismatch {
            field: name.to_string(),
            expected: expected.type_name(),
        });
    }

    match def {
        FieldDef::String(def) => {
            if let Some(text) = value.as_str() {
                check_string(name, def, text)?;
            }
        }
        FieldDef::Number(def) => {
            if let Some(n) = value.as_f64() {
                check_number(name, def, n)?;
            }
        }
        FieldDef::Boolean(_) => {}
    }

    if let Some(predicate) = def.predicate() {
        if !predicate.test(value) {
            return Err(ValidationError::CustomValidationFailed {
                field: name.to_string(),
            });
        }
    }

    Ok(())
}

fn check_string(name: &str, def: &StringDef, text: &str) -> ValidationResult<()> {
    if let Some(pattern) = &def.pattern {
        if !pattern.is_match(text) {
            return Err(ValidationError::PatternMismatch {
                field: name.to_string(),
            });
        }
    }

    let length = text.chars().count();

    if let Some(min) = def.min_length {
        if length < min {
            return Err(ValidationError::TooShort {
                field: name.to_string(),
                min,
            });
        }
    }

    if let Some(max) = def.max_length {
        if length > max {
            return Err(ValidationError::TooLong {
                field: name.to_string(),
                max,
            });
        }
    }

    Ok(())
}

fn check_number(name: &str, def: &NumberDef, n: f64) -> ValidationResult<()> {
    if let Some(min) = def.min {
        if n < min {
            return Err(ValidationError::BelowMinimum {
                field: name.to_string(),
                min,
            });
        }
    }

    if let Some(max) = def.max {
        if n > max {
            return Err(ValidationError::AboveMaximum {
                field: name.to_string(),
                max,
            });
        }
    }

    Ok(())
}

/// Outcome of a validation in wire form.
///
/// Serializes as `{"value": {...}}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    Value(Map<String, Value>),
    Error(String),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Value(_))
    }

    pub fn value(&self) -> Option<&Map<String, Value>> {
        match self {
            Validation::Value(value) => Some(value),
            Validation::Error(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Validation::Value(_) => None,
            Validation::Error(message) => Some(message),
        }
    }
}

impl From<ValidationResult<Map<String, Value>>> for Validation {
    fn from(result: ValidationResult<Map<String, Value>>) -> Self {
        match result {
            Ok(value) => Validation::Value(value),
            Err(err) => Validation::Error(err.to_string()),
        }
    }
}
