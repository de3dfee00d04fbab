//! Error types for the contacts service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::validation::{Field, MissingFields, ValidationFailure};
use thiserror::Error;

/// Failures of a contact store operation.
///
/// A lookup that finds nothing is not an error; operations return
/// `Option::None` for that case.
#[derive(Error, Debug)]
pub enum ContactError {
    /// One or more required fields were absent or blank
    #[error("missing required field: {0}")]
    MissingField(MissingFields),

    /// Supplied data violates the contact schema
    #[error("invalid field: {0}")]
    InvalidField(ValidationFailure),

    /// The durable store could not be written
    #[error("persistence error: {0}")]
    PersistenceError(#[from] StorageError),
}

impl ContactError {
    /// HTTP status a transport should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingField(_) => 400,
            Self::InvalidField(_) => 409,
            Self::PersistenceError(_) => 500,
        }
    }

    /// Fields the caller has to fix, empty for infrastructure failures.
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Self::MissingField(missing) => missing.fields().to_vec(),
            Self::InvalidField(failure) => failure.fields(),
            Self::PersistenceError(_) => Vec::new(),
        }
    }

    /// Whether the same request may succeed once the store recovers.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::PersistenceError(_))
    }
}

impl From<MissingFields> for ContactError {
    fn from(missing: MissingFields) -> Self {
        Self::MissingField(missing)
    }
}

impl From<ValidationFailure> for ContactError {
    fn from(failure: ValidationFailure) -> Self {
        Self::InvalidField(failure)
    }
}

/// Errors raised by a contact storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing medium failed
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The stored collection could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The stored collection breaks a collection invariant
    #[error("corrupt collection: {0}")]
    Corrupt(String),

    /// The backend refused the operation
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
