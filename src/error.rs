//! Error types for the contacts backend.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationErrors;
use rusqlite::ErrorCode;
use thiserror::Error;

/// Errors produced by the lifecycle managers and the storage adapter.
#[derive(Error, Debug)]
pub enum ContactsError {
    /// Field validation failed before anything was written
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Entity does not exist
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A uniqueness or reference constraint rejected the write
    #[error("Constraint violation: {0}")]
    Conflict(String),

    /// Request body could not be decoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Uploaded multipart payload is missing or unreadable
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// Bulk import stopped part-way; earlier records stay committed
    #[error("Import aborted at record {position} after {created} contacts were created: {source}")]
    ImportAborted {
        position: usize,
        created: usize,
        #[source]
        source: Box<ContactsError>,
    },

    /// Failed to parse or produce JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other storage failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ContactsError {
    /// Shorthand for a not-found error naming the entity and id.
    pub fn not_found(entity: &str, id: i64) -> Self {
        Self::NotFound(format!("{} {} not found", entity, id))
    }
}

impl From<rusqlite::Error> for ContactsError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(code, message)
                if code.code == ErrorCode::ConstraintViolation =>
            {
                ContactsError::Conflict(message.clone().unwrap_or_else(|| code.to_string()))
            }
            _ => ContactsError::Storage(err.to_string()),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactsError
pub type ContactsResult<T> = Result<T, ContactsError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
