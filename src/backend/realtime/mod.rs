//! Real-time Module
//!
//! This module pushes frames to connected clients over WebSocket.
//!
//! # Architecture
//!
//! The realtime module is organized into focused submodules:
//!
//! - **`broadcast`** - Per-connection frame queues and fan-out
//! - **`presence`** - Identity → live channel directory
//! - **`channel`** - `GET /ws` upgrade handler and frame protocol
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── broadcast.rs    - ChannelHandle and fan_out
//! ├── presence.rs     - PresenceDirectory
//! └── channel.rs      - WebSocket connection lifecycle
//! ```
//!
//! # Frames
//!
//! The server pushes `welcome`, `presence`, `chat`, `chat_ack`,
//! `tale_approved` and `error` frames (see `shared::event`). Delivery is
//! best-effort: a frame for an identity with no live channel is dropped.

/// Frame queues and fan-out
pub mod broadcast;

/// Presence directory
pub mod presence;

/// WebSocket channel endpoint
pub mod channel;

pub use broadcast::{fan_out, ChannelHandle, FanOut, FrameReceiver, FrameSender};
pub use channel::{handle_channel_upgrade, ChannelSession};
pub use presence::PresenceDirectory;
