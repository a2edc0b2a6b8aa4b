// src/infrastructure/repositories/sqlite/error.rs
use crate::domain::error::DomainError;
use diesel::r2d2;
use diesel::result::Error as DieselError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqliteRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] DieselError),

    #[error("Diesel connection error: {0}")]
    ConnectionError(#[from] diesel::ConnectionError),

    #[error("Connection pool error: {0}")]
    ConnectionPoolError(String),

    #[error("Bookmark not found with ID: {0}")]
    BookmarkNotFound(i32),

    #[error("Bookmark ID already taken: {0}")]
    DuplicateId(i32),

    #[error("Failed to convert entity: {0}")]
    ConversionError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Migration error: {0}")]
    MigrationError(String),

    #[error("Repository operation failed: {0}")]
    OperationFailed(String),
}

pub type SqliteResult<T> = Result<T, SqliteRepositoryError>;

impl From<r2d2::Error> for SqliteRepositoryError {
    fn from(err: r2d2::Error) -> Self {
        SqliteRepositoryError::ConnectionPoolError(err.to_string())
    }
}

/// Collapse repository failures onto the store's error kinds. Id collisions
/// and missing records keep their identity; everything else is a storage
/// failure as far as callers are concerned.
impl From<SqliteRepositoryError> for DomainError {
    fn from(err: SqliteRepositoryError) -> Self {
        match err {
            SqliteRepositoryError::BookmarkNotFound(id) => DomainError::NotFound(id),
            SqliteRepositoryError::DuplicateId(id) => DomainError::DuplicateKey(id),
            SqliteRepositoryError::DatabaseError(e) => {
                DomainError::StorageUnavailable(format!("database error: {}", e))
            }
            SqliteRepositoryError::ConnectionError(e) => {
                DomainError::StorageUnavailable(format!("connection error: {}", e))
            }
            SqliteRepositoryError::ConnectionPoolError(e) => {
                DomainError::StorageUnavailable(format!("connection pool error: {}", e))
            }
            SqliteRepositoryError::ConversionError(e) => {
                DomainError::StorageUnavailable(format!("conversion error: {}", e))
            }
            SqliteRepositoryError::IoError(e) => {
                DomainError::StorageUnavailable(format!("io error: {}", e))
            }
            SqliteRepositoryError::MigrationError(e) => {
                DomainError::StorageUnavailable(format!("migration error: {}", e))
            }
            SqliteRepositoryError::OperationFailed(e) => DomainError::StorageUnavailable(e),
        }
    }
}
