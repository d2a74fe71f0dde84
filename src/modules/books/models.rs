use serde::{Deserialize, Serialize};
use shelf_validation::{FieldKind, FieldRule, Schema};

/// Constraint table for [`BookRecord`] request bodies.
pub static BOOK_RECORD_SCHEMA: Schema = Schema::new(
    "BookRecord",
    &[
        FieldRule::required("id", FieldKind::Integer)
            .with_description("Numeric identifier for the book"),
        FieldRule::required("name", FieldKind::String).with_description("Name of the book"),
    ],
);

/// A validated identifier and name pair. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Numeric identifier for the book
    pub id: i64,
    /// Name of the book
    pub name: String,
}
