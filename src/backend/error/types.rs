/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the server. Every store and
 * handler returns these errors, and they convert directly into HTTP
 * responses or channel `error` frames.
 *
 * # Error Categories
 *
 * ## Access Errors
 *
 * - `Unauthorized` - missing, unknown or orphaned session token
 * - `InvalidCredential` - login with a wrong name/secret pair
 * - `Forbidden` - valid session without the required privilege
 *
 * ## Lookup Errors
 *
 * - `NotFound` - unknown tale or identity, or a tale not visible to the caller
 * - `InvalidParticipant` - a chat endpoint does not resolve to an identity
 * - `Conflict` - display name already taken
 *
 * ## Input Errors
 *
 * - `SharedError` - missing required field or undecodable JSON
 * - `ProtocolError` - malformed channel frame
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use zcode::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::forbidden("admin privilege required");
/// assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or invalid session/admin token
    #[error("Unauthorized: {message}")]
    Unauthorized {
        message: String,
    },

    /// Name and secret do not match
    #[error("Invalid credentials")]
    InvalidCredential,

    /// Authenticated but lacking the required privilege
    #[error("Forbidden: {message}")]
    Forbidden {
        message: String,
    },

    /// Duplicate identity on register
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// Unknown tale or identity id
    #[error("Not found: {message}")]
    NotFound {
        message: String,
    },

    /// Chat sender or recipient is not a known identity
    #[error("Invalid participant: {message}")]
    InvalidParticipant {
        message: String,
    },

    /// Malformed channel frame
    ///
    /// Reported back on the channel as an `error` frame; the channel stays open.
    #[error("Protocol error: {message}")]
    ProtocolError {
        message: String,
    },

    /// Server state could not be read or written
    #[error("State error: {message}")]
    StateError {
        message: String,
    },

    /// Shared error (from shared module)
    ///
    /// Validation failures surface here as InvalidInput.
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn invalid_participant(message: impl Into<String>) -> Self {
        Self::InvalidParticipant {
            message: message.into(),
        }
    }

    /// Create a new protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::ProtocolError {
            message: message.into(),
        }
    }

    /// Create a new state error
    pub fn state(message: impl Into<String>) -> Self {
        Self::StateError {
            message: message.into(),
        }
    }

    /// Create an InvalidInput error for a field
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Unauthorized`, `InvalidCredential` - 401
    /// - `Forbidden` - 403
    /// - `NotFound`, `InvalidParticipant` - 404
    /// - `Conflict` - 409
    /// - `ProtocolError`, validation errors - 400
    /// - `StateError`, serialization errors - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized { .. } | Self::InvalidCredential => StatusCode::UNAUTHORIZED,
            Self::Forbidden { .. } => StatusCode::FORBIDDEN,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::NotFound { .. } | Self::InvalidParticipant { .. } => StatusCode::NOT_FOUND,
            Self::ProtocolError { .. } => StatusCode::BAD_REQUEST,
            Self::StateError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(err) => match err {
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::SerializationError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
