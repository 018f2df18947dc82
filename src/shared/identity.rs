//! Identity Data Structures
//!
//! An identity is a registered account: a stable generated id plus the
//! profile attributes users can see and edit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Avatar assigned when registration does not pick one
pub const DEFAULT_AVATAR: &str = "default";

/// A registered account
///
/// `id` is the only lookup key. `display_name` is shown to other users and
/// used to find the account at login, but nothing else keys on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Stable identifier (UUID v4)
    pub id: Uuid,
    /// Name shown to other users
    pub display_name: String,
    /// Avatar code (emoji or picklist key)
    pub avatar: String,
    /// Free-form profile text
    #[serde(default)]
    pub bio: String,
    /// Login secret; absent for passwordless accounts and never serialized
    #[serde(skip)]
    pub credential: Option<String>,
    /// Activity points earned from tales, approvals and messages
    #[serde(default)]
    pub points: u64,
    /// Tales owned by this identity, in submission order
    #[serde(default)]
    pub owned_tale_ids: Vec<Uuid>,
    /// Identities this account follows
    #[serde(default)]
    pub following_ids: BTreeSet<Uuid>,
    /// Identities following this account
    #[serde(default)]
    pub follower_ids: BTreeSet<Uuid>,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Create a fresh identity with zeroed counters
    pub fn new(display_name: String, avatar: Option<String>, credential: Option<String>) -> Self {
        let avatar = avatar
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_AVATAR.to_string());

        Self {
            id: Uuid::new_v4(),
            display_name,
            avatar,
            bio: String::new(),
            credential: credential.filter(|c| !c.is_empty()),
            points: 0,
            owned_tale_ids: Vec::new(),
            following_ids: BTreeSet::new(),
            follower_ids: BTreeSet::new(),
            created_at: Utc::now(),
        }
    }

    /// Check a login secret against the stored one
    ///
    /// Passwordless identities accept a missing or empty credential.
    pub fn credential_matches(&self, candidate: Option<&str>) -> bool {
        let candidate = candidate.filter(|c| !c.is_empty());
        self.credential.as_deref() == candidate
    }

    /// Apply a partial profile edit
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(bio) = update.bio {
            self.bio = bio;
        }
        if let Some(avatar) = update.avatar {
            self.avatar = avatar;
        }
    }

    /// Public summary with the given online flag
    pub fn summary(&self, online: bool) -> IdentitySummary {
        IdentitySummary {
            id: self.id,
            display_name: self.display_name.clone(),
            avatar: self.avatar.clone(),
            points: self.points,
            online,
        }
    }
}

/// Public view of an identity, used in the user directory and presence snapshots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySummary {
    pub id: Uuid,
    pub display_name: String,
    pub avatar: String,
    pub points: u64,
    pub online: bool,
}

/// Partial profile edit; only provided fields change
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}
