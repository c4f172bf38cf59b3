//! Error types for the back-office core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur across the store, the managers,
//! and the screen-facing glue.

use thiserror::Error;

/// The main error type for the back-office core.
///
/// All fallible operations in the crate return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use backoffice_core::error::CoreError;
///
/// let error = CoreError::Validation {
///     field: "name".to_string(),
///     message: "must not be blank".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid field 'name': must not be blank");
/// ```
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required field on a mutation request was missing or blank.
    #[error("Invalid field '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A JSON document could not be parsed.
    ///
    /// Raised both for snapshot import blobs and for persisted values that
    /// fail to decode at load time.
    #[error("Malformed JSON in {context}: {message}")]
    MalformedJson {
        /// Where the document came from (a store key or "snapshot import").
        context: String,
        /// A description of the parse error.
        message: String,
    },

    /// A persisted value could not be read from the store.
    #[error("Failed to read key '{key}' from store: {message}")]
    StoreRead {
        /// The store key that failed to read.
        key: String,
        /// A description of the read failure.
        message: String,
    },

    /// A value could not be written to the store.
    #[error("Failed to write key '{key}' to store: {message}")]
    StoreWrite {
        /// The store key that failed to write.
        key: String,
        /// A description of the write failure.
        message: String,
    },

    /// Bootstrap configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Bootstrap configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A media device (camera) could not be acquired.
    ///
    /// The scan screen catches this and degrades gracefully; it is never
    /// fatal.
    #[error("Media access failed: {message}")]
    MediaAccess {
        /// A description of the acquisition failure.
        message: String,
    },
}

/// A type alias for Results that return CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
