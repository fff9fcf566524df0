//! Unified error type for the crate.
//!
//! Every fallible operation returns [`Result`]. Field-level validation
//! failures travel as a structured [`ValidationErrors`] set rather than a
//! single message so callers can attach each message to its field.

use crate::core::validate::ValidationErrors;
use thiserror::Error;

/// Crate-wide error enum.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong.
        message: String,
    },

    /// The record failed one or more field-level validation rules.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// Export was requested for a record missing a required identity field.
    #[error("Record is not complete enough to export: missing {field}")]
    IncompleteRecord {
        /// The camelCase name of the missing field.
        field: &'static str,
    },

    /// A submission is already outstanding for this session.
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// Writing to the host clipboard failed.
    #[error("Clipboard error: {message}")]
    Clipboard {
        /// Description reported by the clipboard provider.
        message: String,
    },

    /// Database error from the persistence layer.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// JSON document could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error from file import/export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
