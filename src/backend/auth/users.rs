/**
 * Identity Store
 *
 * This module holds registered identities in memory. Identities are keyed
 * by their generated id; a secondary display-name index exists only so
 * login can find an account by the name the user typed.
 */

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::sessions::{admin_secret_matches, Principal};
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::error::require_text;
use crate::shared::{Identity, IdentitySummary, ProfileUpdate};

/// Reserved display name of the operator account
///
/// It never exists in the store; logging in with it is checked against the
/// configured admin secret instead.
pub const ADMIN_NAME: &str = "admin";

#[derive(Debug, Default)]
struct IdentityIndex {
    by_id: HashMap<Uuid, Identity>,
    by_name: HashMap<String, Uuid>,
}

/// Shared handle to the identity store
#[derive(Clone, Debug, Default)]
pub struct IdentityStore {
    inner: Arc<RwLock<IdentityIndex>>,
}

fn is_reserved(display_name: &str) -> bool {
    display_name.eq_ignore_ascii_case(ADMIN_NAME)
}

impl IdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new identity
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - display name is blank
    /// * `Conflict` - display name is taken or reserved
    pub async fn register(
        &self,
        display_name: Option<&str>,
        avatar: Option<String>,
        credential: Option<String>,
    ) -> BackendResult<Identity> {
        let display_name = require_text("displayName", display_name)?;
        if is_reserved(display_name) {
            tracing::warn!("[Identity] Rejected registration of reserved name");
            return Err(BackendError::conflict(format!("{} is reserved", display_name)));
        }

        let mut index = self.inner.write().await;
        if index.by_name.contains_key(display_name) {
            tracing::warn!("[Identity] Display name already taken: {}", display_name);
            return Err(BackendError::conflict(format!("{} already exists", display_name)));
        }

        let identity = Identity::new(display_name.to_string(), avatar, credential);
        index.by_name.insert(identity.display_name.clone(), identity.id);
        index.by_id.insert(identity.id, identity.clone());

        tracing::info!("[Identity] Registered {} ({})", identity.display_name, identity.id);
        Ok(identity)
    }

    /// Check a login attempt
    ///
    /// The reserved admin name is checked against `admin_secret` and yields
    /// an admin principal; every other name must match a stored identity.
    pub async fn authenticate(
        &self,
        display_name: &str,
        credential: Option<&str>,
        admin_secret: &str,
    ) -> BackendResult<Principal> {
        let display_name = display_name.trim();
        if is_reserved(display_name) {
            return if admin_secret_matches(credential, admin_secret) {
                Ok(Principal::Admin)
            } else {
                tracing::warn!("[Identity] Failed admin login");
                Err(BackendError::InvalidCredential)
            };
        }

        let index = self.inner.read().await;
        let identity = index
            .by_name
            .get(display_name)
            .and_then(|id| index.by_id.get(id))
            .ok_or(BackendError::InvalidCredential)?;

        if !identity.credential_matches(credential) {
            tracing::warn!("[Identity] Invalid credential for {}", display_name);
            return Err(BackendError::InvalidCredential);
        }

        Ok(Principal::Member(identity.id))
    }

    pub async fn get(&self, id: Uuid) -> Option<Identity> {
        self.inner.read().await.by_id.get(&id).cloned()
    }

    /// Get an identity or fail with NotFound
    pub async fn require(&self, id: Uuid) -> BackendResult<Identity> {
        self.get(id)
            .await
            .ok_or_else(|| BackendError::not_found(format!("identity {}", id)))
    }

    pub async fn exists(&self, id: Uuid) -> bool {
        self.inner.read().await.by_id.contains_key(&id)
    }

    /// Apply a partial profile edit
    pub async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> BackendResult<Identity> {
        self.modify(id, |identity| identity.apply(update)).await
    }

    /// Add points to an identity's counter, returning the new total
    pub async fn award(&self, id: Uuid, points: u64) -> BackendResult<u64> {
        let identity = self
            .modify(id, |identity| {
                identity.points = identity.points.saturating_add(points);
            })
            .await?;
        Ok(identity.points)
    }

    /// Record a tale as owned by an identity
    pub async fn attach_tale(&self, id: Uuid, tale_id: Uuid) -> BackendResult<()> {
        self.modify(id, |identity| identity.owned_tale_ids.push(tale_id))
            .await
            .map(|_| ())
    }

    /// Make `follower_id` follow `target_id`, returning the follower
    pub async fn follow(&self, follower_id: Uuid, target_id: Uuid) -> BackendResult<Identity> {
        self.set_following(follower_id, target_id, true).await
    }

    /// Undo a follow, returning the follower
    pub async fn unfollow(&self, follower_id: Uuid, target_id: Uuid) -> BackendResult<Identity> {
        self.set_following(follower_id, target_id, false).await
    }

    async fn set_following(
        &self,
        follower_id: Uuid,
        target_id: Uuid,
        following: bool,
    ) -> BackendResult<Identity> {
        if follower_id == target_id {
            return Err(BackendError::invalid_input("id", "cannot follow yourself"));
        }

        let mut index = self.inner.write().await;
        if !index.by_id.contains_key(&follower_id) {
            return Err(BackendError::unauthorized("session identity no longer exists"));
        }
        let target = index
            .by_id
            .get_mut(&target_id)
            .ok_or_else(|| BackendError::not_found(format!("identity {}", target_id)))?;
        if following {
            target.follower_ids.insert(follower_id);
        } else {
            target.follower_ids.remove(&follower_id);
        }

        let follower = index
            .by_id
            .get_mut(&follower_id)
            .ok_or_else(|| BackendError::state("follower vanished mid-update"))?;
        if following {
            follower.following_ids.insert(target_id);
        } else {
            follower.following_ids.remove(&target_id);
        }
        Ok(follower.clone())
    }

    /// Public summaries of every identity, in registration order
    pub async fn directory(&self, online: &HashSet<Uuid>) -> Vec<IdentitySummary> {
        self.all()
            .await
            .iter()
            .map(|identity| identity.summary(online.contains(&identity.id)))
            .collect()
    }

    /// Full profiles of every identity, in registration order
    pub async fn all(&self) -> Vec<Identity> {
        let index = self.inner.read().await;
        let mut identities: Vec<Identity> = index.by_id.values().cloned().collect();
        identities.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        identities
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    async fn modify<F>(&self, id: Uuid, f: F) -> BackendResult<Identity>
    where
        F: FnOnce(&mut Identity),
    {
        let mut index = self.inner.write().await;
        let identity = index
            .by_id
            .get_mut(&id)
            .ok_or_else(|| BackendError::not_found(format!("identity {}", id)))?;
        f(identity);
        Ok(identity.clone())
    }
}
