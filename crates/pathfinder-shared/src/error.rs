//! Application error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Auth is enabled but no [database] section is configured")]
    MissingDatabase,

    #[error("Internal error: {0}")]
    InternalError(String),
}
