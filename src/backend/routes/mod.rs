//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//! Routes are organized by functionality into focused submodules.
//!
//! # Architecture
//!
//! - **`router`** - Main router creation, layers and fallback
//! - **`chat_routes`** - WebSocket channel route
//! - **`api_routes`** - JSON API endpoints (identity, tales, admin)
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── chat_routes.rs  - Channel route
//! └── api_routes.rs   - API endpoint routes
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use zcode::backend::routes::create_router;
//! use zcode::backend::server::{config::ServerConfig, state::AppState};
//!
//! let router = create_router(AppState::new(ServerConfig::default()));
//! ```

/// Main router creation
pub mod router;

/// Channel routes
pub mod chat_routes;

/// API routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
