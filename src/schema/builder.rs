//! Fluent field builders
//!
//! A builder accumulates the constraints of one field and snapshots them into
//! a [`FieldDef`] on demand. Constraints that do not apply to the declared
//! type (`min`/`max` on booleans, `pattern` on anything but strings) are
//! accepted and ignored.
//!
//! String length bounds are whole character counts: a fractional minimum
//! rounds up, a fractional maximum rounds down, and a negative or non-finite
//! length bound is ignored.

use regex::Regex;
use serde_json::Value;

use super::types::{
    BooleanDef, CustomPredicate, FieldDef, FieldRules, FieldType, NumberDef, Pattern, StringDef,
};

/// Starts a string field
pub fn string() -> FieldBuilder {
    FieldBuilder::new(FieldType::String)
}

/// Starts a number field
pub fn number() -> FieldBuilder {
    FieldBuilder::new(FieldType::Number)
}

/// Starts a boolean field
pub fn boolean() -> FieldBuilder {
    FieldBuilder::new(FieldType::Boolean)
}

/// Constraint accumulator for a single field.
///
/// ```
/// use objcheck::string;
///
/// let name = string().min(2).max(20).required();
/// assert!(name.finalize().is_required());
/// ```
#[derive(Debug, Clone)]
pub struct FieldBuilder {
    field_type: FieldType,
    required: bool,
    predicate: Option<CustomPredicate>,
    min: Option<f64>,
    max: Option<f64>,
    pattern: Option<Pattern>,
}

impl FieldBuilder {
    /// Creates a builder with no constraints set
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            required: false,
            predicate: None,
            min: None,
            max: None,
            pattern: None,
        }
    }

    /// Returns the declared type
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// Marks the field as mandatory
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attaches a custom predicate, replacing any earlier one
    pub fn validate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(CustomPredicate::new(predicate));
        self
    }

    /// Minimum length for strings, minimum value for numbers
    pub fn min(mut self, n: impl Into<f64>) -> Self {
        if self.supports_bounds() {
            self.min = Some(n.into());
        }
        self
    }

    /// Maximum length for strings, maximum value for numbers
    pub fn max(mut self, n: impl Into<f64>) -> Self {
        if self.supports_bounds() {
            self.max = Some(n.into());
        }
        self
    }

    /// Regular expression a string value must match (search semantics)
    pub fn pattern(mut self, regex: Regex) -> Self {
        if self.field_type == FieldType::String {
            self.pattern = Some(Pattern::new(regex));
        }
        self
    }

    /// Snapshots the accumulated constraints.
    ///
    /// Reads the builder without resetting it, so repeated calls return equal
    /// definitions.
    pub fn finalize(&self) -> FieldDef {
        let rules = FieldRules {
            required: self.required,
            predicate: self.predicate.clone(),
        };

        match self.field_type {
            FieldType::String => FieldDef::String(StringDef {
                rules,
                min_length: self.min.and_then(|n| length_bound(n, f64::ceil)),
                max_length: self.max.and_then(|n| length_bound(n, f64::floor)),
                pattern: self.pattern.clone(),
            }),
            FieldType::Number => FieldDef::Number(NumberDef {
                rules,
                min: self.min,
                max: self.max,
            }),
            FieldType::Boolean => FieldDef::Boolean(BooleanDef { rules }),
        }
    }

    fn supports_bounds(&self) -> bool {
        matches!(self.field_type, FieldType::String | FieldType::Number)
    }
}

fn length_bound(n: f64, round: fn(f64) -> f64) -> Option<usize> {
    if n.is_finite() && n >= 0.0 {
        Some(round(n) as usize)
    } else {
        None
    }
}
