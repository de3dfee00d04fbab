//! Domain value objects.
//!
//! Type-safe wrappers that validate at construction time, so an invalid
//! value cannot be represented once it has been built.

pub mod contact_id;
pub mod errors;

pub use contact_id::ContactId;
pub use errors::ContactIdError;
