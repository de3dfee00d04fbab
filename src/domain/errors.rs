//! Domain value object errors.

use std::fmt;

/// Errors that can occur when constructing a `ContactId`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactIdError {
    /// The provided ID is empty.
    Empty,
}

impl fmt::Display for ContactIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "ID cannot be empty"),
        }
    }
}

impl std::error::Error for ContactIdError {}
