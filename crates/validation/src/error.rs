//! Error types produced while validating request input

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::schema::{FieldKind, FieldRule};

/// The rule a field failed to satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    Required,
    Integer,
    Number,
    String,
    Boolean,
    /// The coerced object still did not fit the target record type.
    Shape,
}

impl From<FieldKind> for Constraint {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Integer => Constraint::Integer,
            FieldKind::Number => Constraint::Number,
            FieldKind::String => Constraint::String,
            FieldKind::Boolean => Constraint::Boolean,
        }
    }
}

/// A single field-level rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub constraint: Constraint,
    pub message: String,
}

impl Violation {
    pub(crate) fn missing(rule: &FieldRule) -> Self {
        Self {
            field: rule.name.to_string(),
            constraint: Constraint::Required,
            message: format!("{} is required", rule.name),
        }
    }

    pub(crate) fn wrong_kind(rule: &FieldRule, found: &serde_json::Value) -> Self {
        Self {
            field: rule.name.to_string(),
            constraint: rule.kind.into(),
            message: format!(
                "{} must be {}, found {}",
                rule.name,
                rule.kind.describe(),
                json_type_name(found)
            ),
        }
    }

    pub(crate) fn shape(message: impl Into<String>) -> Self {
        Self {
            field: "$".to_string(),
            constraint: Constraint::Shape,
            message: message.into(),
        }
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(n) if n.is_f64() => "floating-point number",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Body failed its schema. Always carries at least one violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{schema} failed validation: {}", summary(.violations))]
pub struct ValidationError {
    schema: &'static str,
    violations: Vec<Violation>,
}

fn summary(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub(crate) fn new(schema: &'static str, violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { schema, violations }
    }

    pub fn schema(&self) -> &'static str {
        self.schema
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    /// Names of the offending fields, in report order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.violations.iter().map(|v| v.field.as_str())
    }
}

/// A scalar request parameter could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{name} must be an integer, got {value:?}")]
pub struct ClientInputError {
    pub name: String,
    pub value: String,
}
