//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for identity and session endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - Identity registration handler
//! ├── login.rs     - Session login handler
//! ├── me.rs        - Current identity read/edit handlers
//! └── directory.rs - User directory and follow handlers
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /auth/register
//! - **`login`** - POST /auth/login
//! - **`get_me`** / **`update_me`** - GET/POST /me
//! - **`list_users`** - GET /users
//! - **`follow_user`** / **`unfollow_user`** - POST/DELETE /users/{id}/follow
//!
//! # Example
//!
//! ```rust,no_run
//! use zcode::backend::auth::handlers::{register, login, get_me};
//! use zcode::backend::server::state::AppState;
//! use axum::{routing::post, routing::get, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/auth/register", post(register))
//!     .route("/auth/login", post(login))
//!     .route("/me", get(get_me));
//! ```

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Current identity handlers
pub mod me;

/// Directory and follow handlers
pub mod directory;

// Re-export commonly used types
pub use types::{IdentityResponse, LoginRequest, LoginResponse, MeResponse, RegisterRequest, TokenRequest};

// Re-export handlers
pub use directory::{follow_user, list_users, unfollow_user};
pub use login::login;
pub use me::{get_me, update_me};
pub use register::register;
