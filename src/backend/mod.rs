//! Backend Module
//!
//! This module contains all server-side code for the Z-Code backend: an
//! Axum HTTP server with a WebSocket channel for real-time delivery.
//!
//! # Overview
//!
//! The backend module includes:
//! - Identity registration, login and session tokens
//! - Tale submission with admin moderation and a public feed
//! - A presence directory of live WebSocket channels
//! - Direct message routing with an in-memory conversation log
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Identity store, session registry, identity handlers
//! - **`tales`** - Tale store, moderation gate, tale and admin handlers
//! - **`realtime`** - Channel queues, presence directory, WebSocket endpoint
//! - **`chat`** - Message router and conversation log
//! - **`middleware`** - `Authorization` header extractor
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - zcode-server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Identities and sessions
//! ├── tales/          - Tales and moderation
//! ├── realtime/       - Presence and WebSocket channel
//! ├── chat/           - Direct messages
//! ├── middleware/     - Request extractors
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! Every store is a `Clone` handle over `Arc<RwLock<..>>`, built once in
//! `AppState::new` and shared by handlers and channel tasks. Each mutation
//! holds one lock for its whole read-modify-write, so concurrent requests
//! never interleave inside a store operation. Nothing is persisted.
//!
//! # Error Handling
//!
//! Handlers return `BackendResult<T>`; `BackendError` converts into a JSON
//! error response, or into an `error` frame on the channel.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Identities and sessions
pub mod auth;

/// Tales and moderation
pub mod tales;

/// Real-time channel and presence
pub mod realtime;

/// Direct messaging
pub mod chat;

/// Backend error types
pub mod error;

/// Request extractors
pub mod middleware;

/// Re-export commonly used types
pub use error::{BackendError, BackendResult};
pub use server::{create_app, AppState, ServerConfig};
