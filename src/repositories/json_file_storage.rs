use crate::error::{StorageError, StorageResult};
use crate::models::Contact;
use crate::repositories::traits::ContactStorage;
use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Contact storage backed by a single JSON file.
///
/// The file holds one JSON array of contacts. Writes go to a sibling
/// temporary file which is then renamed over the target, so a reader never
/// observes a partially written collection.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage handle for the given file. Nothing is touched on disk
    /// until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("contacts"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

#[async_trait]
impl ContactStorage for JsonFileStorage {
    async fn read_all(&self) -> StorageResult<Vec<Contact>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No collection at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(Self::io_error(&self.path, e)),
        };

        // serde_json rejects an empty document
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Vec::new());
        }

        let contacts: Vec<Contact> = serde_json::from_slice(&bytes)?;
        tracing::debug!(
            "Read {} contacts from {}",
            contacts.len(),
            self.path.display()
        );
        Ok(contacts)
    }

    async fn write_all(&self, contacts: &[Contact]) -> StorageResult<()> {
        let bytes = serde_json::to_vec_pretty(contacts)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| Self::io_error(parent, e))?;
            }
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, &bytes)
            .await
            .map_err(|e| Self::io_error(&temp, e))?;

        if let Err(e) = tokio::fs::rename(&temp, &self.path).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(Self::io_error(&self.path, e));
        }

        tracing::debug!(
            "Wrote {} contacts to {}",
            contacts.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactId;
    use crate::models::ContactDraft;

    fn sample(id: &str, name: &str) -> Contact {
        Contact::from_draft(
            ContactId::new(id).unwrap(),
            ContactDraft::new(name, "ann@test.com", "555-999-8888"),
        )
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("contacts.json"));
        assert!(storage.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, "  \n").unwrap();

        let storage = JsonFileStorage::new(&path);
        assert_eq!(storage.path(), path.as_path());
        assert!(storage.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("db").join("contacts.json"));

        let contacts = vec![sample("b", "Bob Jones"), sample("a", "Alice Smith")];
        storage.write_all(&contacts).await.unwrap();

        assert_eq!(storage.read_all().await.unwrap(), contacts);
        assert!(!storage.temp_path().exists());
    }

    #[tokio::test]
    async fn test_write_replaces_collection() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("contacts.json"));

        storage
            .write_all(&[sample("a", "Alice Smith"), sample("b", "Bob Jones")])
            .await
            .unwrap();
        storage.write_all(&[sample("c", "Carol Brown")]).await.unwrap();

        let stored = storage.read_all().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id.as_str(), "c");
    }

    #[tokio::test]
    async fn test_reads_plain_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(
            &path,
            r#"[{"id":"1","name":"Ann Lee","email":"ann@test.com","phone":"555-999-8888"}]"#,
        )
        .unwrap();

        let stored = JsonFileStorage::new(&path).read_all().await.unwrap();
        assert_eq!(stored[0].name, "Ann Lee");
    }

    #[tokio::test]
    async fn test_malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contacts.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = JsonFileStorage::new(&path).read_all().await;
        assert!(matches!(result, Err(StorageError::Json(_))));
    }

    #[tokio::test]
    async fn test_unwritable_location_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the parent directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let storage = JsonFileStorage::new(blocker.join("contacts.json"));
        let result = storage.write_all(&[sample("a", "Alice Smith")]).await;
        assert!(matches!(result, Err(StorageError::Io { .. })));
    }
}
