use crate::error::StorageResult;
use crate::models::Contact;
use crate::repositories::traits::ContactStorage;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Contact storage that lives only as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    contacts: Mutex<Vec<Contact>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: Mutex::new(contacts),
        }
    }
}

#[async_trait]
impl ContactStorage for InMemoryStorage {
    async fn read_all(&self) -> StorageResult<Vec<Contact>> {
        Ok(self.contacts.lock().await.clone())
    }

    async fn write_all(&self, contacts: &[Contact]) -> StorageResult<()> {
        *self.contacts.lock().await = contacts.to_vec();
        Ok(())
    }
}
