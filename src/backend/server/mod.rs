//! Server Module
//!
//! This module contains the code that initializes and configures the Axum
//! HTTP server.
//!
//! # Architecture
//!
//! The server module is organized into focused submodules:
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Configuration loading and validation
//! - **`init`** - App creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - ServerConfig (defaults, TOML file, environment)
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: defaults, then `ZCODE_CONFIG` file, then environment
//! 2. **State Creation**: empty stores wired together
//! 3. **Router Creation**: routes, layers and fallback
//!
//! # Example
//!
//! ```rust,no_run
//! use zcode::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::load()?;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
//! axum::serve(listener, create_app(config)).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, create_app_with_state};
pub use state::AppState;
