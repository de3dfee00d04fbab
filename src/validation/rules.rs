//! Per-field constraint predicates.
//!
//! Each rule checks one field in isolation and reports every constraint it
//! breaks, so callers can aggregate violations across fields.

use super::errors::{Field, FieldViolation};
use once_cell::sync::Lazy;
use regex::Regex;

/// Top-level domains accepted when no allow-list is configured.
pub const DEFAULT_ALLOWED_TLDS: [&str; 3] = ["com", "net", "ua"];

/// Upper bound on the full address, per RFC 5321.
const MAX_EMAIL_LEN: usize = 254;

// Dot-atom local part: no leading, trailing or doubled dots.
static EMAIL_LOCAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*$")
        .expect("Failed to compile email local part regex")
});

static DOMAIN_LABEL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?$")
        .expect("Failed to compile domain label regex")
});

/// `+1 (555) 123-4567`, `(555) 123 4567`, `555-999-8888`, `555.123.456789`
///
/// ASCII digits only; separators are space, dot or hyphen.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?([0-9]{1,3}[ .-]?)?(\([0-9]{3}\)|[0-9]{3})[ .-]?[0-9]{3}[ .-]?[0-9]{4,6}$")
        .expect("Failed to compile phone regex")
});

/// Length bounds on a contact name, counted in characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRule {
    pub min_chars: usize,
    pub max_chars: usize,
}

impl Default for NameRule {
    fn default() -> Self {
        Self {
            min_chars: 3,
            max_chars: 35,
        }
    }
}

impl NameRule {
    pub fn check(&self, name: &str) -> Vec<FieldViolation> {
        let len = name.chars().count();
        let mut violations = Vec::new();

        if len < self.min_chars {
            violations.push(FieldViolation::new(
                Field::Name,
                format!(
                    "length must be at least {} characters long",
                    self.min_chars
                ),
            ));
        }
        if len > self.max_chars {
            violations.push(FieldViolation::new(
                Field::Name,
                format!(
                    "length must be less than or equal to {} characters long",
                    self.max_chars
                ),
            ));
        }

        violations
    }
}

/// Email syntax plus domain restrictions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRule {
    /// Lower-case TLDs the domain may end in.
    pub allowed_tlds: Vec<String>,
    pub min_domain_segments: usize,
}

impl Default for EmailRule {
    fn default() -> Self {
        Self::with_tlds(DEFAULT_ALLOWED_TLDS)
    }
}

impl EmailRule {
    /// Build a rule accepting the given TLDs and at least two domain segments.
    pub fn with_tlds<I, S>(tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed_tlds: tlds
                .into_iter()
                .map(|t| t.as_ref().trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            min_domain_segments: 2,
        }
    }

    pub fn check(&self, email: &str) -> Vec<FieldViolation> {
        let Some((local, domain)) = Self::split_address(email) else {
            return vec![FieldViolation::new(Field::Email, "must be a valid email")];
        };

        let labels: Vec<&str> = domain.split('.').collect();
        if !EMAIL_LOCAL_REGEX.is_match(local)
            || !labels.iter().all(|label| DOMAIN_LABEL_REGEX.is_match(label))
        {
            return vec![FieldViolation::new(Field::Email, "must be a valid email")];
        }

        let mut violations = Vec::new();

        if labels.len() < self.min_domain_segments {
            violations.push(FieldViolation::new(
                Field::Email,
                format!(
                    "must have at least {} domain segments",
                    self.min_domain_segments
                ),
            ));
        }

        // A single-label domain has no TLD to speak of.
        if labels.len() > 1 {
            let tld = labels[labels.len() - 1].to_ascii_lowercase();
            if !self.allowed_tlds.iter().any(|allowed| *allowed == tld) {
                violations.push(FieldViolation::new(
                    Field::Email,
                    format!(
                        "must have an allowed top-level domain ({})",
                        self.allowed_tlds.join(", ")
                    ),
                ));
            }
        }

        violations
    }

    /// Split into local part and domain, requiring exactly one '@'.
    fn split_address(email: &str) -> Option<(&str, &str)> {
        if email.len() > MAX_EMAIL_LEN {
            return None;
        }
        let (local, domain) = email.split_once('@')?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return None;
        }
        Some((local, domain))
    }
}

/// Phone number shape.
#[derive(Debug, Clone)]
pub struct PhoneRule {
    pub pattern: Regex,
}

impl Default for PhoneRule {
    fn default() -> Self {
        Self {
            pattern: PHONE_REGEX.clone(),
        }
    }
}

impl PhoneRule {
    pub fn check(&self, phone: &str) -> Vec<FieldViolation> {
        if self.pattern.is_match(phone) {
            Vec::new()
        } else {
            vec![FieldViolation::new(
                Field::Phone,
                "must be a valid phone number",
            )]
        }
    }
}
