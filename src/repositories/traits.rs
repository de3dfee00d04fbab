use crate::error::StorageResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Durable home of the contact collection.
///
/// The collection is read and replaced as a whole. Implementations must make
/// `write_all` atomic from the caller's point of view: after it returns
/// `Ok`, `read_all` yields exactly the written records; after it returns
/// `Err`, the previously stored collection is still intact.
#[async_trait]
pub trait ContactStorage: Send + Sync {
    /// Read the full collection, in stored order.
    async fn read_all(&self) -> StorageResult<Vec<Contact>>;

    /// Replace the full collection.
    async fn write_all(&self, contacts: &[Contact]) -> StorageResult<()>;
}
