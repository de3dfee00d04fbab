//! Persistence contract between the contact store and its storage backend.
//!
//! Uses a call-counting mock to check when the store reads and writes, and
//! that a failed write never leaves memory ahead of storage.

mod mocks;

use contacts_mcp_server::error::ContactError;
use contacts_mcp_server::models::{Contact, ContactDraft, ContactFields};
use contacts_mcp_server::services::{ContactService, ContactStore};
use contacts_mcp_server::{ContactId, Validator};
use mocks::MockContactStorage;
use std::sync::Arc;

fn ann() -> ContactFields {
    ContactFields::new("Ann Lee", "ann@test.com", "+1 (555) 123-4567")
}

fn stored_contact(id: &str, name: &str) -> Contact {
    Contact::from_draft(
        ContactId::new(id).unwrap(),
        ContactDraft::new(name, "someone@mail.net", "555-123-4567"),
    )
}

async fn open(storage: &MockContactStorage) -> ContactStore {
    ContactStore::open(Arc::new(storage.clone()), Validator::default())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_open_reads_collection_once() {
    let storage = MockContactStorage::with_contacts(vec![
        stored_contact("1", "Alice Smith"),
        stored_contact("2", "Bob Jones"),
    ]);
    let store = open(&storage).await;

    assert_eq!(storage.get_call_count("read_all"), 1);

    let names: Vec<String> = store.list_contacts().await.into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Alice Smith", "Bob Jones"]);
    assert!(store.get_contact_by_id("2").await.is_some());

    // Reads are served from memory
    assert_eq!(storage.get_call_count("read_all"), 1);
    assert_eq!(storage.get_call_count("write_all"), 0);
}

#[tokio::test]
async fn test_each_mutation_writes_whole_collection() {
    let storage = MockContactStorage::with_contacts(vec![stored_contact("1", "Alice Smith")]);
    let store = open(&storage).await;

    let created = store.add_contact(ann()).await.unwrap();
    assert_eq!(storage.get_call_count("write_all"), 1);
    assert_eq!(storage.stored().len(), 2);
    assert_eq!(storage.stored()[1], created);

    store
        .update_contact(created.id.as_str(), ContactFields::phone("555-999-8888"))
        .await
        .unwrap();
    assert_eq!(storage.get_call_count("write_all"), 2);
    assert_eq!(storage.stored()[1].phone, "555-999-8888");

    store.remove_contact("1").await.unwrap();
    assert_eq!(storage.get_call_count("write_all"), 3);
    assert_eq!(storage.stored().len(), 1);
    assert_eq!(storage.stored()[0].id, created.id);
}

#[tokio::test]
async fn test_rejected_input_never_writes() {
    let storage = MockContactStorage::new();
    let store = open(&storage).await;

    let _ = store
        .add_contact(ContactFields {
            email: Some("ann@test.com".to_string()),
            phone: Some("555-999-8888".to_string()),
            ..Default::default()
        })
        .await;
    let _ = store
        .add_contact(ContactFields::new("Al", "ann@test.com", "555-999-8888"))
        .await;
    let _ = store.update_contact("1", ContactFields::default()).await;
    let _ = store.update_contact("1", ContactFields::phone("12")).await;

    assert_eq!(storage.get_call_count("write_all"), 0);
}

#[tokio::test]
async fn test_not_found_never_writes() {
    let storage = MockContactStorage::new();
    let store = open(&storage).await;

    assert!(store
        .update_contact("missing", ContactFields::phone("555-999-8888"))
        .await
        .unwrap()
        .is_none());
    assert!(store.remove_contact("missing").await.unwrap().is_none());

    assert_eq!(storage.get_call_count("write_all"), 0);
}

#[tokio::test]
async fn test_failed_write_then_retry() {
    let storage = MockContactStorage::new();
    let store = open(&storage).await;

    storage.set_fail_writes(true);
    let err = store.add_contact(ann()).await.unwrap_err();
    assert!(matches!(err, ContactError::PersistenceError(_)));
    assert_eq!(err.status_code(), 500);
    assert!(store.list_contacts().await.is_empty());
    assert!(storage.stored().is_empty());

    storage.set_fail_writes(false);
    let created = store.add_contact(ann()).await.unwrap();
    assert_eq!(store.list_contacts().await, vec![created.clone()]);
    assert_eq!(storage.stored(), vec![created]);
}

#[tokio::test]
async fn test_failed_remove_keeps_record() {
    let storage = MockContactStorage::with_contacts(vec![stored_contact("1", "Alice Smith")]);
    let store = open(&storage).await;

    storage.set_fail_writes(true);
    assert!(store.remove_contact("1").await.is_err());
    assert!(store.get_contact_by_id("1").await.is_some());
    assert_eq!(storage.stored().len(), 1);
}
