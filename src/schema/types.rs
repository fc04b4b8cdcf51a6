//! Field and schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string, optional length bounds and pattern
//! - number: any JSON number, optional value bounds
//! - boolean: no extra constraints
//!
//! A `FieldDef` is the immutable snapshot a `FieldBuilder` produces. It is
//! tagged by type so the validator matches on it exhaustively.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::builder::FieldBuilder;

/// Primitive types a field can be declared with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Integer or floating point number
    Number,
    /// Boolean
    Boolean,
}

impl FieldType {
    /// Returns the type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
        }
    }

    /// Whether `value` has this runtime type.
    ///
    /// `null`, arrays and objects never match.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Caller-supplied rule run after the built-in checks.
///
/// Two predicates are equal only if they are the same closure instance.
#[derive(Clone)]
pub struct CustomPredicate(Arc<dyn Fn(&Value) -> bool + Send + Sync>);

impl CustomPredicate {
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Runs the predicate against a field value
    pub fn test(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl PartialEq for CustomPredicate {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomPredicate(..)")
    }
}

/// Compiled regular expression attached to a string field.
///
/// Compared by source text.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(regex: Regex) -> Self {
        Self(regex)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.0.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Constraints shared by every field type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldRules {
    /// Whether the field must be present
    pub required: bool,
    /// Optional custom rule
    pub predicate: Option<CustomPredicate>,
}

/// Finalized string field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringDef {
    pub rules: FieldRules,
    /// Minimum length in characters
    pub min_length: Option<usize>,
    /// Maximum length in characters
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
}

/// Finalized number field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberDef {
    pub rules: FieldRules,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Finalized boolean field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BooleanDef {
    pub rules: FieldRules,
}

/// Immutable field definition produced by `FieldBuilder::finalize`
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDef {
    String(StringDef),
    Number(NumberDef),
    Boolean(BooleanDef),
}

impl FieldDef {
    /// Returns the declared type
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldDef::String(_) => FieldType::String,
            FieldDef::Number(_) => FieldType::Number,
            FieldDef::Boolean(_) => FieldType::Boolean,
        }
    }

    /// Returns the constraints shared by all types
    pub fn rules(&self) -> &FieldRules {
        match self {
            FieldDef::String(def) => &def.rules,
            FieldDef::Number(def) => &def.rules,
            FieldDef::Boolean(def) => &def.rules,
        }
    }

    pub fn is_required(&self) -> bool {
        self.rules().required
    }

    pub fn predicate(&self) -> Option<&CustomPredicate> {
        self.rules().predicate.as_ref()
    }
}

/// Ordered mapping of field name to field builder.
///
/// Declaration order decides which violation is reported first.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(String, FieldBuilder)>,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field.
    ///
    /// Declaring an existing name replaces its builder and keeps its position.
    pub fn field(mut self, name: impl Into<String>, builder: FieldBuilder) -> Self {
        self.insert(name, builder);
        self
    }

    /// In-place form of [`Schema::field`]
    pub fn insert(&mut self, name: impl Into<String>, builder: FieldBuilder) {
        let name = name.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = builder,
            None => self.fields.push((name, builder)),
        }
    }

    /// Gets the builder declared for `name`
    pub fn get(&self, name: &str) -> Option<&FieldBuilder> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, builder)| builder)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Fields in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldBuilder)> {
        self.fields.iter().map(|(name, builder)| (name.as_str(), builder))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldBuilder)> for Schema {
    fn from_iter<I: IntoIterator<Item = (K, FieldBuilder)>>(iter: I) -> Self {
        let mut schema = Schema::new();
        for (name, builder) in iter {
            schema.insert(name, builder);
        }
        schema
    }
}
