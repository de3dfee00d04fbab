//! Validation outcomes for contact input.

use std::fmt;

/// A contact field subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
}

impl Field {
    /// All fields, in the order they are reported.
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Phone];

    /// The field's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single broken rule on a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: Field,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" {}", self.field, self.message)
    }
}

/// Every rule violation found in one candidate, in field order.
///
/// Never empty: the validator only builds one when at least one rule failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    violations: Vec<FieldViolation>,
}

impl ValidationFailure {
    pub(crate) fn new(violations: Vec<FieldViolation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// Distinct fields that failed, in field order.
    pub fn fields(&self) -> Vec<Field> {
        let mut fields: Vec<Field> = self.violations.iter().map(|v| v.field).collect();
        fields.dedup();
        fields
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.violations.iter().map(|v| v.to_string()).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

/// Required fields that were absent or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingFields(pub Vec<Field>);

impl MissingFields {
    pub fn fields(&self) -> &[Field] {
        &self.0
    }
}

impl fmt::Display for MissingFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.0.iter().map(Field::as_str).collect();
        f.write_str(&names.join(", "))
    }
}

impl std::error::Error for MissingFields {}
