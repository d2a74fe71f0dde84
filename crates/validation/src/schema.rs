//! Declarative field constraints consulted by the validator.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Type constraint for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// A JSON number with no fractional part that fits in an `i64`.
    Integer,
    /// Any JSON number.
    Number,
    String,
    Boolean,
}

impl FieldKind {
    /// Coerce `value` into this kind, or `None` if it cannot satisfy it.
    ///
    /// Strings are never parsed into numbers. The only transformation is a
    /// whole-valued float (`1.0`) becoming an integer.
    pub fn coerce(self, value: &Value) -> Option<Value> {
        match self {
            FieldKind::Integer => match value {
                Value::Number(n) if n.is_i64() => Some(value.clone()),
                Value::Number(n) => n
                    .as_f64()
                    .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                    .map(|f| Value::from(f as i64)),
                _ => None,
            },
            FieldKind::Number => value.is_number().then(|| value.clone()),
            FieldKind::String => value.is_string().then(|| value.clone()),
            FieldKind::Boolean => value.is_boolean().then(|| value.clone()),
        }
    }

    /// Article and noun used in violation messages.
    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::Integer => "an integer",
            FieldKind::Number => "a number",
            FieldKind::String => "a string",
            FieldKind::Boolean => "a boolean",
        }
    }

    fn json_schema(self) -> Value {
        match self {
            FieldKind::Integer => json!({"type": "integer", "format": "int64"}),
            FieldKind::Number => json!({"type": "number"}),
            FieldKind::String => json!({"type": "string"}),
            FieldKind::Boolean => json!({"type": "boolean"}),
        }
    }
}

/// One row of the constraint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub description: &'static str,
}

impl FieldRule {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            description: "",
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            description: "",
        }
    }

    /// Attach a human-readable description, surfaced in OpenAPI output.
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }
}

/// Named, ordered set of field rules.
///
/// Field order is significant: violations are reported in the order the
/// rules are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    name: &'static str,
    fields: &'static [FieldRule],
}

impl Schema {
    pub const fn new(name: &'static str, fields: &'static [FieldRule]) -> Self {
        Self { name, fields }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &'static [FieldRule] {
        self.fields
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldRule> {
        self.fields.iter().find(|rule| rule.name == name)
    }

    /// Render this schema as a JSON Schema object for OpenAPI components.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for rule in self.fields {
            let mut property = rule.kind.json_schema();
            if !rule.description.is_empty() {
                property["description"] = Value::from(rule.description);
            }
            properties.insert(rule.name.to_string(), property);
        }

        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|rule| rule.required)
            .map(|rule| rule.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: Schema = Schema::new(
        "Sample",
        &[
            FieldRule::required("id", FieldKind::Integer).with_description("Identifier"),
            FieldRule::optional("flag", FieldKind::Boolean),
        ],
    );

    #[test]
    fn integer_rejects_numeric_strings() {
        assert_eq!(FieldKind::Integer.coerce(&json!("1")), None);
        assert_eq!(FieldKind::Integer.coerce(&json!(7)), Some(json!(7)));
    }

    #[test]
    fn integer_accepts_whole_floats_only() {
        assert_eq!(FieldKind::Integer.coerce(&json!(3.0)), Some(json!(3)));
        assert_eq!(FieldKind::Integer.coerce(&json!(3.5)), None);
        assert_eq!(FieldKind::Integer.coerce(&json!(1e300)), None);
    }

    #[test]
    fn number_accepts_fractions() {
        assert_eq!(FieldKind::Number.coerce(&json!(2.5)), Some(json!(2.5)));
        assert_eq!(FieldKind::Number.coerce(&json!(true)), None);
    }

    #[test]
    fn field_lookup_by_name() {
        assert_eq!(SAMPLE.field("id").map(|r| r.kind), Some(FieldKind::Integer));
        assert!(SAMPLE.field("missing").is_none());
    }

    #[test]
    fn json_schema_lists_required_fields_only() {
        let rendered = SAMPLE.to_json_schema();
        assert_eq!(rendered["required"], json!(["id"]));
        assert_eq!(rendered["properties"]["id"]["type"], "integer");
        assert_eq!(rendered["properties"]["id"]["description"], "Identifier");
        assert!(rendered["properties"]["flag"].get("description").is_none());
    }
}
