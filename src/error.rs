//! Error types for Messagely.

use thiserror::Error;

/// Common error type for Messagely.
#[derive(Error, Debug)]
pub enum MessagelyError {
    /// Database error.
    ///
    /// Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error (unknown user or wrong credentials).
    #[error("authentication error: {0}")]
    Auth(String),

    /// The caller is authenticated but may not perform the action.
    #[error("permission denied: {0}")]
    Permission(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource already exists.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Unexpected server-side failure (e.g. password hashing).
    #[error("internal error: {0}")]
    Internal(String),
}

// Unique-constraint violations are a conflict with existing data, not a
// storage failure.
impl From<sqlx::Error> for MessagelyError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.is_unique_violation() {
                return MessagelyError::Conflict(db_err.message().to_string());
            }
        }
        MessagelyError::Database(e.to_string())
    }
}

/// Result type alias for Messagely operations.
pub type Result<T> = std::result::Result<T, MessagelyError>;
