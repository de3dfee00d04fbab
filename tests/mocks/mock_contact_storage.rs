use async_trait::async_trait;
use contacts_mcp_server::error::{StorageError, StorageResult};
use contacts_mcp_server::models::Contact;
use contacts_mcp_server::repositories::ContactStorage;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Mock contact storage for testing.
///
/// Holds the collection in memory, tracks method calls for verification and
/// can be told to fail writes to simulate an unavailable disk.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactStorage {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    fail_writes: Arc<AtomicBool>,
}

#[allow(dead_code)]
impl MockContactStorage {
    /// Create a new empty MockContactStorage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MockContactStorage holding the given collection.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let storage = Self::new();
        *storage.contacts.lock().unwrap() = contacts;
        storage
    }

    /// The collection as last written.
    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Make every subsequent write fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl ContactStorage for MockContactStorage {
    async fn read_all(&self) -> StorageResult<Vec<Contact>> {
        self.track_call("read_all");
        Ok(self.stored())
    }

    async fn write_all(&self, contacts: &[Contact]) -> StorageResult<()> {
        self.track_call("write_all");

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable("mock write failure".to_string()));
        }

        *self.contacts.lock().unwrap() = contacts.to_vec();
        Ok(())
    }
}
