pub mod mock_contact_storage;

pub use mock_contact_storage::MockContactStorage;
