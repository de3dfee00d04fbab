//! Schema check over whole contact candidates.

use super::errors::{Field, FieldViolation, MissingFields, ValidationFailure};
use super::rules::{EmailRule, NameRule, PhoneRule};
use crate::models::{ContactDraft, ContactFields};

/// Declarative set of per-field rules.
#[derive(Debug, Clone, Default)]
pub struct ContactSchema {
    pub name: NameRule,
    pub email: EmailRule,
    pub phone: PhoneRule,
}

/// Decides whether a proposed contact may be written.
///
/// Stateless apart from its schema; every check is a pure function of the
/// candidate.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    schema: ContactSchema,
}

impl Validator {
    pub fn new(schema: ContactSchema) -> Self {
        Self { schema }
    }

    /// Default schema with a custom TLD allow-list.
    pub fn with_allowed_tlds<I, S>(tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(ContactSchema {
            email: EmailRule::with_tlds(tlds),
            ..Default::default()
        })
    }

    /// Check a complete candidate against every field rule.
    ///
    /// All fields are checked; the failure lists every violation found.
    pub fn validate(&self, candidate: &ContactDraft) -> Result<(), ValidationFailure> {
        let mut violations = self.schema.name.check(&candidate.name);
        violations.extend(self.schema.email.check(&candidate.email));
        violations.extend(self.schema.phone.check(&candidate.phone));
        Self::into_result(violations)
    }

    /// Check only the fields that are present.
    pub fn validate_present(&self, fields: &ContactFields) -> Result<(), ValidationFailure> {
        let mut violations = Vec::new();
        if let Some(name) = fields.present(Field::Name) {
            violations.extend(self.schema.name.check(name));
        }
        if let Some(email) = fields.present(Field::Email) {
            violations.extend(self.schema.email.check(email));
        }
        if let Some(phone) = fields.present(Field::Phone) {
            violations.extend(self.schema.phone.check(phone));
        }
        Self::into_result(violations)
    }

    fn into_result(violations: Vec<FieldViolation>) -> Result<(), ValidationFailure> {
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure::new(violations))
        }
    }
}

/// Pre-check that every field is present and non-blank.
///
/// Runs before the schema check; missing fields are reported in field order.
pub fn require_fields(fields: &ContactFields) -> Result<ContactDraft, MissingFields> {
    let values = [
        fields.present(Field::Name),
        fields.present(Field::Email),
        fields.present(Field::Phone),
    ];

    match values {
        [Some(name), Some(email), Some(phone)] => Ok(ContactDraft::new(name, email, phone)),
        _ => Err(MissingFields(
            Field::ALL
                .into_iter()
                .zip(values)
                .filter_map(|(field, value)| value.is_none().then_some(field))
                .collect(),
        )),
    }
}
