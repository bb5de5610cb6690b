//! Domain errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid menu item at {path}: {reason}")]
    InvalidMenuItem { path: String, reason: String },

    #[error("Menu source error: {0}")]
    MenuSourceError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Auth service unavailable: {0}")]
    AuthServiceUnavailable(String),

    #[error("Auth service rejected the request: {0}")]
    AuthRejected(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Validation error: {0}")]
    ValidationError(String),
}
