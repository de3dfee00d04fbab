//! Contacts MCP Server: a contact book with a file-backed store.
//!
//! This library manages a single collection of contacts (name, email, phone)
//! and exposes create/read/update/delete operations over the Model Context
//! Protocol.
//!
//! # Architecture
//!
//! - **models**: The contact record and the input shapes that build it
//! - **domain**: Value objects such as `ContactId`
//! - **validation**: Required-field pre-check and per-field schema rules
//! - **repositories**: The `ContactStorage` capability and its JSON file and in-memory backends
//! - **services**: `ContactStore`, which owns the collection and its persistence
//! - **server**: MCP tools mapping onto the store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod validation;

pub use config::Config;
pub use domain::ContactId;
pub use error::{ConfigError, ContactError, ContactResult, StorageError, StorageResult};
pub use models::{Contact, ContactDraft, ContactFields};
pub use repositories::{ContactStorage, InMemoryStorage, JsonFileStorage};
pub use server::{ApiResponse, ContactsMcpServer};
pub use services::{ContactService, ContactStore};
pub use validation::{ContactSchema, Field, Validator};
