//! Middleware Module
//!
//! This module contains request-processing helpers that run before handlers.
//!
//! # Architecture
//!
//! The middleware module currently provides:
//!
//! - **`auth`** - `AuthSession` extractor resolving the `Authorization` header
//!
//! # Example
//!
//! ```rust,no_run
//! use zcode::backend::middleware::AuthSession;
//!
//! async fn handler(session: AuthSession) -> String {
//!     format!("admin: {}", session.is_admin())
//! }
//! ```

pub mod auth;

pub use auth::{extract_token, AuthSession};
