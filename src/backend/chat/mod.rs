//! Chat Backend Module
//!
//! This module contains server-side direct messaging:
//! - Routing a message to its recipient's live channel
//! - An in-memory log per conversation for history reads
//!
//! # Architecture
//!
//! - **`router`** - `MessageRouter`, validates participants and delivers frames
//! - **`log`** - `ConversationLog`, messages keyed by the unordered identity pair
//! - **`handlers`** - HTTP handler for conversation history
//!
//! Messages arrive over the WebSocket channel (see `realtime::channel`);
//! there is no HTTP send endpoint.
//!
//! # Example
//!
//! ```rust,no_run
//! use zcode::backend::server::{config::ServerConfig, state::AppState};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::new(ServerConfig::default());
//! let alice = state.identities.register(Some("alice"), None, None).await?;
//! let bob = state.identities.register(Some("bob"), None, None).await?;
//! state.router.route(alice.id, bob.id, "yo", None).await?;
//! # Ok(())
//! # }
//! ```

/// Message routing
pub mod router;

/// Conversation log
pub mod log;

/// History handler
pub mod handlers;

pub use handlers::get_conversation;
pub use log::{ConversationKey, ConversationLog};
pub use router::MessageRouter;
