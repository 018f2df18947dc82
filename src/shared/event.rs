/**
 * Channel Frame Protocol
 *
 * This module defines the JSON frames exchanged over the persistent
 * channel. Every frame is a JSON object tagged by its `type` field.
 *
 * # Client → Server
 *
 * - `{"type":"register","token":...}` - bind this channel to the session's identity
 * - `{"type":"chat","token":...,"toId":...,"text":...}` - send a direct message
 *
 * # Server → Client
 *
 * - `welcome` - registration accepted, carries the identity summary
 * - `presence` - snapshot of every identity with its online flag and points
 * - `chat` - a message addressed to this identity
 * - `chat_ack` - echo of a message this identity sent
 * - `tale_approved` - a tale entered the public feed
 * - `error` - a frame could not be processed; the channel stays open
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::identity::IdentitySummary;
use crate::shared::message::ChatMessage;
use crate::shared::tale::Tale;

/// Frame sent by a client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    /// Register this channel for the session's identity
    Register { token: String },
    /// Send a direct message
    Chat {
        token: String,
        #[serde(rename = "toId")]
        to_id: Uuid,
        text: String,
    },
}

impl ClientFrame {
    /// Decode a text frame
    pub fn decode(text: &str) -> Result<Self, SharedError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Encode to a JSON text frame
    pub fn encode(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Frame sent by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerFrame {
    /// Registration accepted
    Welcome { identity: IdentitySummary },
    /// Online/points snapshot of all identities
    Presence { identities: Vec<IdentitySummary> },
    /// Message delivered to its recipient
    Chat { message: ChatMessage },
    /// Echo of a sent message back to its sender
    ChatAck { message: ChatMessage },
    /// A tale was approved and is now in the feed
    TaleApproved { tale: Tale },
    /// A client frame was rejected
    Error { reason: String },
}

impl ServerFrame {
    pub fn error(reason: impl Into<String>) -> Self {
        Self::Error {
            reason: reason.into(),
        }
    }

    /// Wire name of the frame, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            ServerFrame::Welcome { .. } => "welcome",
            ServerFrame::Presence { .. } => "presence",
            ServerFrame::Chat { .. } => "chat",
            ServerFrame::ChatAck { .. } => "chat_ack",
            ServerFrame::TaleApproved { .. } => "tale_approved",
            ServerFrame::Error { .. } => "error",
        }
    }

    /// Encode to a JSON text frame
    pub fn encode(&self) -> Result<String, SharedError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a text frame
    pub fn decode(text: &str) -> Result<Self, SharedError> {
        Ok(serde_json::from_str(text)?)
    }
}
