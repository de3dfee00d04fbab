//! Field validation for contact input.
//!
//! Validation runs in two stages. `require_fields` checks that name, email
//! and phone are all present; `Validator` then applies the schema rules to
//! each field independently and aggregates every violation.

mod errors;
mod rules;
mod validator;

pub use errors::{Field, FieldViolation, MissingFields, ValidationFailure};
pub use rules::{EmailRule, NameRule, PhoneRule, DEFAULT_ALLOWED_TLDS};
pub use validator::{require_fields, ContactSchema, Validator};
