//! Application service layer.
//!
//! Services contain business logic and orchestrate validation and storage.
//! They provide a clean boundary between the MCP handlers and the data
//! access layer.

mod contact_store;

pub use contact_store::{ContactService, ContactStore};
