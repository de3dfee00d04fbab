//! Contact model and the input shapes used to create and update it.

use crate::domain::ContactId;
use crate::validation::Field;
use serde::{Deserialize, Serialize};

/// A stored contact.
///
/// Field order matches the persisted layout: `id, name, email, phone`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, assigned by the store on creation
    pub id: ContactId,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number, as entered
    pub phone: String,
}

impl Contact {
    /// Build a record from a validated draft and a freshly assigned id.
    pub fn from_draft(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
        }
    }

    /// Replace every field present in `fields`; absent fields and the id are kept.
    pub fn apply(&mut self, fields: &ContactFields) {
        if let Some(name) = fields.present(Field::Name) {
            self.name = name.to_string();
        }
        if let Some(email) = fields.present(Field::Email) {
            self.email = email.to_string();
        }
        if let Some(phone) = fields.present(Field::Phone) {
            self.phone = phone.to_string();
        }
    }

    /// The record's fields without its id.
    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// Caller-supplied contact fields, any of which may be missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
        }
    }

    /// Only the phone, as sent by a caller changing one number.
    pub fn phone(phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..Default::default()
        }
    }

    /// The field's value, unless it is absent or blank.
    pub fn present(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.present(*field).is_none())
    }
}

/// A structurally complete `{name, email, phone}` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}
