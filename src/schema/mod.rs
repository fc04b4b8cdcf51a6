//! Schema subsystem for objcheck
//!
//! A schema maps field names to field builders. Validating an object against
//! it either accepts the object or reports the first violated constraint.
//!
//! # Design Principles
//!
//! - Fields are checked in declaration order
//! - First violation wins, one message per call
//! - No coercion, no defaults
//! - Deterministic validation

mod builder;
mod errors;
mod types;
mod validator;

pub use builder::{boolean, number, string, FieldBuilder};
pub use errors::{ValidationError, ValidationErrorKind, ValidationResult};
pub use types::{
    BooleanDef, CustomPredicate, FieldDef, FieldRules, FieldType, NumberDef, Pattern, Schema,
    StringDef,
};
pub use validator::{validate_object, validate_value, Validation, ROOT_FIELD};
