//! Tales Module
//!
//! Short-lived media posts ("tales") and their moderation.
//!
//! # Architecture
//!
//! - **`store`** - `TaleStore`, every tale in submission order
//! - **`moderation`** - `ModerationGate`, the only way a tale becomes approved
//! - **`handlers`** - member endpoints (submit, feed, own tales, repost)
//! - **`admin`** - admin endpoints (login, review, approve, user listing)
//!
//! # Lifecycle
//!
//! ```text
//! submit ──► Pending ──approve(admin)──► Approved
//! ```
//!
//! Approved is terminal and there is no rejection. Only approved tales
//! appear in the public feed or can be reposted.

/// Tale storage
pub mod store;

/// Moderation gate
pub mod moderation;

/// Member handlers
pub mod handlers;

/// Admin handlers
pub mod admin;

pub use moderation::ModerationGate;
pub use store::{NewTale, TaleStore};
