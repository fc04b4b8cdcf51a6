//! objcheck - declarative validation of JSON objects
//!
//! Declare each field with a fluent builder, collect them into a [`Schema`]
//! and validate objects against it:
//!
//! ```
//! use objcheck::{boolean, number, string, validate_value, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .field("name", string().min(2).max(20).required())
//!     .field("age", number().min(18).max(99))
//!     .field("isStudent", boolean().required());
//!
//! let err = validate_value(&schema, &json!({ "age": 25, "isStudent": true })).unwrap_err();
//! assert_eq!(err.to_string(), "'name' is required.");
//! ```

pub mod schema;

pub use schema::{
    boolean, number, string, validate_object, validate_value, FieldBuilder, FieldDef, FieldType,
    Schema, Validation, ValidationError, ValidationErrorKind,
};
