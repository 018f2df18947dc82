//! Backend Error Module
//!
//! This module defines the error taxonomy of the server. These errors are
//! returned by stores and handlers and convert into HTTP responses or
//! channel `error` frames.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and ServerFrame conversions
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;

/// Result alias used across the backend
pub type BackendResult<T> = Result<T, BackendError>;
