//! Error handling utilities for the aura application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use crate::journal::EntryId;
use thiserror::Error;

/// Represents specific error cases that can occur when calling the sentiment provider.
///
/// These errors never abort entry creation: the add-entry flow downgrades them to
/// "no sentiment" and continues. They are still surfaced to callers of the provider
/// directly so the cause can be logged.
///
/// # Examples
///
/// ```
/// use aura::errors::SentimentError;
///
/// let error = SentimentError::ModelNotFound("cardiffnlp/missing".to_string());
/// assert!(format!("{}", error).contains("cardiffnlp/missing"));
/// ```
#[derive(Debug, Error)]
pub enum SentimentError {
    /// The inference API could not be reached.
    #[error("Sentiment API request failed: {0}. Check your network connection.")]
    Request(#[source] reqwest::Error),

    /// The API rejected the token.
    #[error("Sentiment API rejected the access token (HTTP {status}). Check HF_TOKEN.")]
    Unauthorized {
        /// HTTP status code returned by the API
        status: u16,
    },

    /// The configured model does not exist.
    #[error("Sentiment model not found: {0}")]
    ModelNotFound(String),

    /// The model exists but is still being loaded by the provider.
    #[error("Sentiment model is loading, try again shortly: {0}")]
    ModelLoading(String),

    /// Unexpected or malformed response from the API.
    #[error("Invalid response from sentiment API: {0}")]
    InvalidResponse(String),
}

/// Represents specific error cases that can occur during store operations.
///
/// # Examples
///
/// ```
/// use aura::errors::StoreError;
///
/// let error = StoreError::Untagged;
/// assert!(format!("{}", error).contains("tag"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// SQLite database error.
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Connection pool error.
    #[error("Failed to get connection from pool: {0}\n\nThis may indicate database connection issues. Try closing other aura instances.")]
    Pool(#[from] r2d2::Error),

    /// An entry reached the store before it was tagged.
    #[error("Entry must be tagged before it is stored")]
    Untagged,

    /// An entry that already has an id was inserted again.
    #[error("Entry {0} has already been stored")]
    AlreadyPersisted(EntryId),
}

/// Represents all possible errors that can occur in the aura application.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use aura::errors::AppError;
///
/// let error = AppError::Config("HF_TOKEN is missing".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: HF_TOKEN is missing");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem or terminal operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// User input rejected before touching the store or the provider.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Errors raised by the entry store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Errors raised by the sentiment provider.
    #[error("Sentiment error: {0}")]
    Sentiment(#[from] SentimentError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
pub type AppResult<T> = Result<T, AppError>;

/// Result of a store operation.
pub type StoreResult<T> = Result<T, StoreError>;
