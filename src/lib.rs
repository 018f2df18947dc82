//! Z-Code - Main Library
//!
//! Z-Code is a small social backend: people register, post media "tales"
//! that an admin approves into a public feed, and chat with each other in
//! real time over a persistent WebSocket channel.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the server and its clients
//!   - Identity, tale and chat message structures
//!   - Channel frame protocol
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and WebSocket channel endpoint
//!   - Identity store, session registry
//!   - Tale store and moderation gate
//!   - Presence directory and message router
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Server-side code. Without it only the wire types
//!   in `shared` are built.
//!
//! # Usage
//!
//! ```rust,no_run
//! use zcode::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() {
//! let app = create_app(ServerConfig::default());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```
//!
//! # State
//!
//! All state is in memory and lost on restart. Every store is an explicit
//! object built once by `create_app` and handed to handlers through
//! `AppState`, so tests can build fresh, isolated instances.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
