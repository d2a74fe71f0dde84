//! Request validation for shelf.
//!
//! A [`Schema`] is a declarative table of field rules. A [`Validator`] consults
//! that table to turn an untyped JSON value into a typed record, or reports
//! every unmet rule as a [`Violation`]. Path parameters are handled separately
//! by [`parse_int_param`].

pub mod error;
pub mod param;
pub mod schema;
pub mod validator;

pub use error::{ClientInputError, Constraint, ValidationError, Violation};
pub use param::parse_int_param;
pub use schema::{FieldKind, FieldRule, Schema};
pub use validator::Validator;
