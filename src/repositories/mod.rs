mod json_file_storage;
mod memory_storage;
mod traits;

pub use json_file_storage::JsonFileStorage;
pub use memory_storage::InMemoryStorage;
pub use traits::ContactStorage;
