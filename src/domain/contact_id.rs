//! ContactId value object.

use super::errors::ContactIdError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// A type-safe wrapper for contact IDs.
///
/// Ids are opaque strings. The store mints new ones with [`ContactId::generate`];
/// ids read back from storage only have to be non-empty.
///
/// # Example
///
/// ```
/// use contacts_mcp_server::domain::ContactId;
///
/// let minted = ContactId::generate();
/// assert_eq!(minted.as_str().len(), 36);
///
/// let stored = ContactId::new("0b6b2a3e-5f1c-4d8e-9a57-3c2e1f4d6a90").unwrap();
/// assert_eq!(stored.to_string(), "0b6b2a3e-5f1c-4d8e-9a57-3c2e1f4d6a90");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Wrap an existing id.
    ///
    /// # Errors
    ///
    /// Returns `ContactIdError::Empty` if the provided ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ContactIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ContactIdError::Empty);
        }
        Ok(Self(id))
    }

    /// Mint a fresh random (v4 UUID) id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
