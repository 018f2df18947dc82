//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the server and its clients. They define the JSON wire format of the HTTP
//! API and of the persistent channel protocol.
//!
//! # Overview
//!
//! The shared module has no server dependencies, so a client crate can use
//! it to encode requests and decode responses and frames.

/// Identity (account) data structures
pub mod identity;

/// Tale (media post) data structures
pub mod tale;

/// Direct chat message data structure
pub mod message;

/// Channel frame protocol
pub mod event;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use identity::{Identity, IdentitySummary, ProfileUpdate};
pub use tale::{MediaKind, ModerationStatus, Tale};
pub use message::ChatMessage;
pub use event::{ClientFrame, ServerFrame};
pub use error::SharedError;
