use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ValidationError, Violation};
use crate::schema::Schema;

/// Validates untyped input against a [`Schema`] and converts it to a record.
///
/// Stateless: one instance is built at startup and shared across requests.
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    schema: &'static Schema,
}

impl Validator {
    pub const fn new(schema: &'static Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Coerce `input` into the schema's shape and deserialize it as `T`.
    ///
    /// Only fields named by the schema are copied; unknown keys are dropped
    /// and `null` counts as absent. Input that is not an object is treated as
    /// an empty object, so every required field is reported missing.
    pub fn validate<T: DeserializeOwned>(&self, input: &Value) -> Result<T, ValidationError> {
        let object = input.as_object();
        let mut coerced = Map::new();
        let mut violations = Vec::new();

        for rule in self.schema.fields() {
            let value = object
                .and_then(|fields| fields.get(rule.name))
                .filter(|value| !value.is_null());

            match value {
                None if rule.required => violations.push(Violation::missing(rule)),
                None => {}
                Some(value) => match rule.kind.coerce(value) {
                    Some(value) => {
                        coerced.insert(rule.name.to_string(), value);
                    }
                    None => violations.push(Violation::wrong_kind(rule, value)),
                },
            }
        }

        if !violations.is_empty() {
            tracing::debug!(
                schema = self.schema.name(),
                violations = violations.len(),
                "input rejected"
            );
            return Err(ValidationError::new(self.schema.name(), violations));
        }

        serde_json::from_value(Value::Object(coerced)).map_err(|err| {
            tracing::warn!(
                schema = self.schema.name(),
                error = %err,
                "coerced input does not fit target type"
            );
            ValidationError::new(self.schema.name(), vec![Violation::shape(err.to_string())])
        })
    }
}
