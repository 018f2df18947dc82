/**
 * Tale Store
 *
 * This module holds every submitted tale in memory, in submission order.
 * Listing methods return newest first by walking that order backwards.
 *
 * The store never approves anything: submission always creates a pending
 * tale, and only the moderation gate in the sibling `moderation` module can
 * flip a tale to approved.
 */

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::IdentityStore;
use crate::backend::error::{BackendError, BackendResult};
use crate::shared::error::require_text;
use crate::shared::{MediaKind, ModerationStatus, Tale};

/// Input for a tale submission
#[derive(Debug, Clone, Default)]
pub struct NewTale {
    pub media_payload: Option<String>,
    pub media_kind: Option<String>,
    pub caption: Option<String>,
}

#[derive(Debug, Default)]
struct TaleLog {
    tales: Vec<Tale>,
    index: HashMap<Uuid, usize>,
}

impl TaleLog {
    fn newest_first<F>(&self, keep: F) -> Vec<Tale>
    where
        F: Fn(&Tale) -> bool,
    {
        self.tales.iter().rev().filter(|t| keep(t)).cloned().collect()
    }

    fn get_mut(&mut self, id: Uuid) -> Option<&mut Tale> {
        let position = *self.index.get(&id)?;
        self.tales.get_mut(position)
    }
}

/// Shared handle to the tale store
#[derive(Clone, Debug)]
pub struct TaleStore {
    inner: Arc<RwLock<TaleLog>>,
    identities: IdentityStore,
    submission_reward: u64,
}

impl TaleStore {
    pub fn new(identities: IdentityStore, submission_reward: u64) -> Self {
        Self {
            inner: Arc::new(RwLock::new(TaleLog::default())),
            identities,
            submission_reward,
        }
    }

    /// Submit a tale for moderation
    ///
    /// The tale is created pending. The owner gets the tale id appended to
    /// their owned tales and earns the submission reward whatever the later
    /// moderation outcome.
    ///
    /// # Errors
    ///
    /// * `InvalidInput` - media payload empty, or media kind missing/unknown
    /// * `NotFound` - owner identity does not exist
    pub async fn submit(&self, owner_id: Uuid, new_tale: NewTale) -> BackendResult<Tale> {
        let media_payload = require_text("mediaPayload", new_tale.media_payload.as_deref())?;
        let media_kind: MediaKind = require_text("mediaKind", new_tale.media_kind.as_deref())?.parse()?;
        let caption = new_tale.caption.unwrap_or_default().trim().to_string();

        if !self.identities.exists(owner_id).await {
            return Err(BackendError::not_found(format!("identity {}", owner_id)));
        }

        let tale = Tale::new(owner_id, media_payload.to_string(), media_kind, caption);
        {
            let mut log = self.inner.write().await;
            let position = log.tales.len();
            log.index.insert(tale.id, position);
            log.tales.push(tale.clone());
        }

        // two separate writes; there is no cross-store transaction
        self.identities.attach_tale(owner_id, tale.id).await?;
        self.identities.award(owner_id, self.submission_reward).await?;

        tracing::info!("[Tales] {} submitted {} tale {} (pending)", owner_id, media_kind, tale.id);
        Ok(tale)
    }

    pub async fn get(&self, id: Uuid) -> Option<Tale> {
        let log = self.inner.read().await;
        log.index.get(&id).and_then(|&i| log.tales.get(i)).cloned()
    }

    /// Approved tales, newest first
    pub async fn feed(&self) -> Vec<Tale> {
        self.inner.read().await.newest_first(Tale::is_approved)
    }

    /// All of an owner's tales in any state, newest first
    pub async fn owned_by(&self, owner_id: Uuid) -> Vec<Tale> {
        self.inner.read().await.newest_first(|t| t.owner_id == owner_id)
    }

    /// Pending tales, newest first
    ///
    /// Callers outside moderation should go through `ModerationGate::pending`,
    /// which enforces the admin privilege.
    pub async fn pending(&self) -> Vec<Tale> {
        self.inner.read().await.newest_first(|t| !t.is_approved())
    }

    /// Increment the repost count of an approved tale
    ///
    /// # Errors
    ///
    /// * `NotFound` - the tale does not exist or is still pending
    pub async fn repost(&self, id: Uuid) -> BackendResult<Tale> {
        let mut log = self.inner.write().await;
        let tale = log
            .get_mut(id)
            .filter(|t| t.is_approved())
            .ok_or_else(|| BackendError::not_found(format!("tale {}", id)))?;

        tale.repost_count = tale.repost_count.saturating_add(1);
        tracing::debug!("[Tales] Tale {} reposted ({} total)", id, tale.repost_count);
        Ok(tale.clone())
    }

    /// Flip a tale to approved
    ///
    /// Returns the tale and whether this call performed the transition. The
    /// check and the write happen under one lock, so concurrent callers see
    /// exactly one `true`.
    pub(super) async fn mark_approved(&self, id: Uuid) -> BackendResult<(Tale, bool)> {
        let mut log = self.inner.write().await;
        let tale = log
            .get_mut(id)
            .ok_or_else(|| BackendError::not_found(format!("tale {}", id)))?;

        let transitioned = tale.status == ModerationStatus::Pending;
        tale.status = ModerationStatus::Approved;
        Ok((tale.clone(), transitioned))
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.tales.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
