//! Tale Data Structures
//!
//! A tale is a media post that must be approved by an admin before it shows
//! up in the public feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Kind of media carried by a tale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaKind::Image => f.write_str("image"),
            MediaKind::Video => f.write_str("video"),
        }
    }
}

impl FromStr for MediaKind {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            other => Err(SharedError::validation(
                "mediaKind",
                format!("unsupported media kind '{}', expected image or video", other),
            )),
        }
    }
}

/// Moderation state of a tale
///
/// `Pending` moves to `Approved` exactly once; `Approved` is terminal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModerationStatus {
    #[default]
    Pending,
    Approved,
}

/// A media post
///
/// Serialized with both `status` and a derived `approved` flag so clients
/// that only know the boolean keep working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "TaleWire", from = "TaleWire")]
pub struct Tale {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub media_payload: String,
    pub media_kind: MediaKind,
    pub caption: String,
    pub status: ModerationStatus,
    pub created_at: DateTime<Utc>,
    pub repost_count: u64,
}

impl Tale {
    /// Create a pending tale
    pub fn new(owner_id: Uuid, media_payload: String, media_kind: MediaKind, caption: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            media_payload,
            media_kind,
            caption,
            status: ModerationStatus::Pending,
            created_at: Utc::now(),
            repost_count: 0,
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == ModerationStatus::Approved
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TaleWire {
    id: Uuid,
    owner_id: Uuid,
    media_payload: String,
    media_kind: MediaKind,
    #[serde(default)]
    caption: String,
    #[serde(default)]
    status: Option<ModerationStatus>,
    #[serde(default)]
    approved: bool,
    created_at: DateTime<Utc>,
    #[serde(default)]
    repost_count: u64,
}

impl From<Tale> for TaleWire {
    fn from(tale: Tale) -> Self {
        Self {
            approved: tale.is_approved(),
            id: tale.id,
            owner_id: tale.owner_id,
            media_payload: tale.media_payload,
            media_kind: tale.media_kind,
            caption: tale.caption,
            status: Some(tale.status),
            created_at: tale.created_at,
            repost_count: tale.repost_count,
        }
    }
}

impl From<TaleWire> for Tale {
    fn from(wire: TaleWire) -> Self {
        let status = wire.status.unwrap_or(if wire.approved {
            ModerationStatus::Approved
        } else {
            ModerationStatus::Pending
        });
        Self {
            id: wire.id,
            owner_id: wire.owner_id,
            media_payload: wire.media_payload,
            media_kind: wire.media_kind,
            caption: wire.caption,
            status,
            created_at: wire.created_at,
            repost_count: wire.repost_count,
        }
    }
}
