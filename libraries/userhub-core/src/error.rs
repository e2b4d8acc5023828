/// Core error types for UserHub
use crate::types::UserId;
use thiserror::Error;

/// Result type alias using `RegistryError`
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors raised by the record store and the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No user with the supplied id exists
    #[error("User not found: {0}")]
    NotFound(UserId),

    /// A record with this id is already stored
    #[error("Duplicate user id: {0}")]
    DuplicateId(UserId),
}

impl RegistryError {
    /// Create a not found error
    pub fn not_found(id: impl Into<UserId>) -> Self {
        Self::NotFound(id.into())
    }

    /// Whether this error reports a missing user
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
