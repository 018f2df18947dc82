//! Authentication Module
//!
//! This module handles identities, registration, login and session tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`users`** - Identity store (profiles, credentials, points, follows)
//! - **`sessions`** - Session registry mapping tokens to principals
//! - **`handlers`** - HTTP handlers for identity endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Identity store
//! ├── sessions.rs     - Session registry
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: display name (+ optional avatar and credential) → identity created
//! 2. **Login**: display name + credential → session token returned
//! 3. **Requests**: token in the `Authorization` header, JSON body, path or query
//!
//! The reserved display name `admin` cannot be registered. Logging in as
//! `admin` with the configured operator secret yields an admin session,
//! which has no identity record.
//!
//! # Security
//!
//! Credentials are stored as given and compared directly; sessions never
//! expire. This backend targets demos and local use.

/// Identity store
pub mod users;

/// Session registry
pub mod sessions;

/// HTTP handlers for identity endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{follow_user, get_me, list_users, login, register, unfollow_user, update_me};
pub use sessions::{Principal, Session, SessionRegistry};
pub use users::IdentityStore;
