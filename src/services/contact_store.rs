//! Contact store.
//!
//! CRUD over the persisted contact collection. Create and update run the
//! validator before touching the collection; every mutation persists the
//! whole collection before it becomes visible to readers.

use crate::domain::ContactId;
use crate::error::{ContactError, ContactResult, StorageError, StorageResult};
use crate::models::{Contact, ContactFields};
use crate::repositories::ContactStorage;
use crate::validation::{require_fields, Field, MissingFields, Validator};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts in stored order.
    async fn list_contacts(&self) -> Vec<Contact>;

    /// Look up a single contact. `None` when no contact has this id.
    async fn get_contact_by_id(&self, id: &str) -> Option<Contact>;

    /// Validate and store a new contact under a freshly generated id.
    async fn add_contact(&self, fields: ContactFields) -> ContactResult<Contact>;

    /// Replace the provided fields of an existing contact.
    ///
    /// Returns `Ok(None)` when no contact has this id. Input problems are
    /// reported before the lookup.
    async fn update_contact(&self, id: &str, fields: ContactFields)
        -> ContactResult<Option<Contact>>;

    /// Delete a contact, returning the removed record.
    async fn remove_contact(&self, id: &str) -> ContactResult<Option<Contact>>;
}

/// Owner of the in-memory contact collection.
///
/// Readers clone the current snapshot and never wait on a write in
/// progress. Writers are serialized by `write_lock` for the whole
/// read-modify-write cycle, and a new snapshot is published only after
/// storage accepted it, so memory never runs ahead of the stored state.
pub struct ContactStore {
    storage: Arc<dyn ContactStorage>,
    validator: Validator,
    snapshot: RwLock<Arc<Vec<Contact>>>,
    write_lock: Mutex<()>,
}

impl ContactStore {
    /// Load the collection from `storage` and take ownership of it.
    ///
    /// # Errors
    ///
    /// Fails if the collection cannot be read or contains duplicate ids.
    pub async fn open(
        storage: Arc<dyn ContactStorage>,
        validator: Validator,
    ) -> StorageResult<Self> {
        let contacts = storage.read_all().await?;
        Self::check_loaded(&contacts, &validator)?;

        tracing::info!("Contact store opened with {} contacts", contacts.len());

        Ok(Self {
            storage,
            validator,
            snapshot: RwLock::new(Arc::new(contacts)),
            write_lock: Mutex::new(()),
        })
    }

    /// Reject duplicate ids; warn about records the schema would refuse.
    fn check_loaded(contacts: &[Contact], validator: &Validator) -> StorageResult<()> {
        let mut seen = HashSet::with_capacity(contacts.len());
        for contact in contacts {
            if !seen.insert(contact.id.as_str()) {
                return Err(StorageError::Corrupt(format!(
                    "duplicate contact id {}",
                    contact.id
                )));
            }
            if let Err(failure) = validator.validate(&contact.to_draft()) {
                tracing::warn!(
                    contact_id = %contact.id,
                    "Stored contact violates schema: {}",
                    failure
                );
            }
        }
        Ok(())
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    async fn current(&self) -> Arc<Vec<Contact>> {
        self.snapshot.read().await.clone()
    }

    /// Persist `next` and publish it. Callers must hold `write_lock`.
    async fn commit(&self, next: Vec<Contact>) -> ContactResult<()> {
        if let Err(e) = self.storage.write_all(&next).await {
            tracing::error!("Failed to persist contacts: {}", e);
            return Err(ContactError::PersistenceError(e));
        }
        *self.snapshot.write().await = Arc::new(next);
        Ok(())
    }

    fn position(contacts: &[Contact], id: &str) -> Option<usize> {
        contacts.iter().position(|c| c.id.as_str() == id)
    }

    fn fresh_id(contacts: &[Contact]) -> ContactId {
        loop {
            let id = ContactId::generate();
            if Self::position(contacts, id.as_str()).is_none() {
                return id;
            }
        }
    }
}

#[async_trait]
impl ContactService for ContactStore {
    async fn list_contacts(&self) -> Vec<Contact> {
        self.current().await.as_ref().clone()
    }

    async fn get_contact_by_id(&self, id: &str) -> Option<Contact> {
        let contacts = self.current().await;
        let found = Self::position(&contacts, id).map(|index| contacts[index].clone());
        if found.is_none() {
            tracing::debug!(contact_id = %id, "Contact not found");
        }
        found
    }

    async fn add_contact(&self, fields: ContactFields) -> ContactResult<Contact> {
        let draft = require_fields(&fields).map_err(|missing| {
            tracing::debug!("Rejected new contact, missing: {}", missing);
            ContactError::from(missing)
        })?;
        self.validator.validate(&draft).map_err(|failure| {
            tracing::debug!("Rejected new contact: {}", failure);
            ContactError::from(failure)
        })?;

        let _guard = self.write_lock.lock().await;
        let current = self.current().await;

        let contact = Contact::from_draft(Self::fresh_id(&current), draft);
        let mut next = Vec::with_capacity(current.len() + 1);
        next.extend(current.iter().cloned());
        next.push(contact.clone());

        self.commit(next).await?;
        tracing::info!(contact_id = %contact.id, "Contact added");
        Ok(contact)
    }

    async fn update_contact(
        &self,
        id: &str,
        fields: ContactFields,
    ) -> ContactResult<Option<Contact>> {
        if fields.is_empty() {
            tracing::debug!(contact_id = %id, "Rejected update with no fields");
            return Err(MissingFields(Field::ALL.to_vec()).into());
        }
        self.validator.validate_present(&fields).map_err(|failure| {
            tracing::debug!(contact_id = %id, "Rejected update: {}", failure);
            ContactError::from(failure)
        })?;

        let _guard = self.write_lock.lock().await;
        let current = self.current().await;

        let Some(index) = Self::position(&current, id) else {
            tracing::debug!(contact_id = %id, "Update target not found");
            return Ok(None);
        };

        let mut next = current.as_ref().clone();
        next[index].apply(&fields);
        let updated = next[index].clone();

        self.commit(next).await?;
        tracing::info!(contact_id = %id, "Contact updated");
        Ok(Some(updated))
    }

    async fn remove_contact(&self, id: &str) -> ContactResult<Option<Contact>> {
        let _guard = self.write_lock.lock().await;
        let current = self.current().await;

        let Some(index) = Self::position(&current, id) else {
            tracing::debug!(contact_id = %id, "Delete target not found");
            return Ok(None);
        };

        let mut next = current.as_ref().clone();
        let removed = next.remove(index);

        self.commit(next).await?;
        tracing::info!(contact_id = %id, "Contact removed");
        Ok(Some(removed))
    }
}
