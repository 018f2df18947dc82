//! Shared Error Types
//!
//! This module defines error types that are shared between the server and any
//! client that speaks the Z-Code wire format. They cover failures that do not
//! depend on server state: malformed input and undecodable frames.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - A required field is missing or has an unusable value
//!
//! # Usage
//!
//! ```rust
//! use zcode::shared::error::SharedError;
//!
//! let error = SharedError::validation("mediaPayload", "media payload is required");
//! assert!(error.to_string().contains("mediaPayload"));
//! ```
use thiserror::Error;

/// Shared error types that can occur on either side of the wire
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Input validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

/// Reject a missing or blank string field
///
/// Returns the trimmed value when present.
pub fn require_text<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, SharedError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(SharedError::validation(field, format!("{} is required", field))),
    }
}
