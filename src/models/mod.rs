//! Data models for contact records and the input shapes that create them.

pub mod contact;

pub use contact::{Contact, ContactDraft, ContactFields};
