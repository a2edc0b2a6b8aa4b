// src/domain/error.rs
use thiserror::Error;

/// Error kinds surfaced by the bookmark store and its callers.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Duplicate bookmark id: {0}")]
    DuplicateKey(i32),

    #[error("Bookmark not found: {0}")]
    NotFound(i32),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Prefix the error message with additional context.
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        match self {
            DomainError::InvalidInput(msg) => {
                DomainError::InvalidInput(format!("{}: {}", context.into(), msg))
            }
            DomainError::StorageUnavailable(msg) => {
                DomainError::StorageUnavailable(format!("{}: {}", context.into(), msg))
            }
            DomainError::Serialization(msg) => {
                DomainError::Serialization(format!("{}: {}", context.into(), msg))
            }
            err => err,
        }
    }
}
