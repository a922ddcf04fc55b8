//! Error types for Bookshelf

use thiserror::Error;

/// Main application error type
///
/// Only conditions the catalog cannot continue from live here. Lookups that
/// miss, repeated borrows and empty listings are reported through
/// [`crate::models::report`] values instead.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed library data: {0}")]
    MalformedData(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
