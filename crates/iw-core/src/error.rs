//! # AppError
//!
//! Centralized error handling for Inkwell.
//! Maps domain failures to the categories the web layer answers with.

use thiserror::Error;

/// The primary error type for all iw-core operations.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found (e.g., an entry id with no row)
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A required path identifier was absent or blank
    #[error("{0} ID is required")]
    MissingId(&'static str),

    /// Infrastructure failure (e.g., DB down, query failed)
    #[error("internal service error: {0}")]
    Internal(String),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(format!("{err:#}"))
    }
}

/// A specialized Result type for Inkwell logic.
pub type Result<T> = std::result::Result<T, AppError>;
