/**
 * Moderation Gate
 *
 * The only component allowed to approve tales. A tale moves
 * `Pending -> Approved` once; approving an approved tale is a no-op that
 * returns the tale unchanged, so a double-clicked approve button is safe.
 *
 * On the real transition the owner earns the approval reward and a
 * `tale_approved` frame is fanned out to every live channel, letting feeds
 * update without polling.
 */

use uuid::Uuid;

use crate::backend::auth::sessions::Principal;
use crate::backend::auth::users::IdentityStore;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::realtime::presence::PresenceDirectory;
use crate::backend::tales::store::TaleStore;
use crate::shared::{ServerFrame, Tale};

#[derive(Clone, Debug)]
pub struct ModerationGate {
    tales: TaleStore,
    identities: IdentityStore,
    presence: PresenceDirectory,
    approval_reward: u64,
}

fn require_admin(principal: Principal) -> BackendResult<()> {
    if principal.is_admin() {
        Ok(())
    } else {
        Err(BackendError::forbidden("admin privilege required"))
    }
}

impl ModerationGate {
    pub fn new(
        tales: TaleStore,
        identities: IdentityStore,
        presence: PresenceDirectory,
        approval_reward: u64,
    ) -> Self {
        Self {
            tales,
            identities,
            presence,
            approval_reward,
        }
    }

    /// Tales awaiting review, newest first
    ///
    /// # Errors
    ///
    /// * `Forbidden` - caller is not the admin
    pub async fn pending(&self, principal: Principal) -> BackendResult<Vec<Tale>> {
        require_admin(principal)?;
        Ok(self.tales.pending().await)
    }

    /// Approve a tale
    ///
    /// # Errors
    ///
    /// * `Forbidden` - caller is not the admin
    /// * `NotFound` - no tale with this id
    pub async fn approve(&self, principal: Principal, tale_id: Uuid) -> BackendResult<Tale> {
        require_admin(principal)?;

        let (tale, transitioned) = self.tales.mark_approved(tale_id).await?;
        if !transitioned {
            tracing::debug!("[Moderation] Tale {} was already approved", tale_id);
            return Ok(tale);
        }

        tracing::info!("[Moderation] Approved tale {} by {}", tale.id, tale.owner_id);

        if let Err(e) = self.identities.award(tale.owner_id, self.approval_reward).await {
            tracing::warn!("[Moderation] Could not reward owner of {}: {}", tale.id, e);
        }

        let notified = self
            .presence
            .broadcast(ServerFrame::TaleApproved { tale: tale.clone() })
            .await;
        tracing::debug!("[Moderation] tale_approved sent to {} channels", notified);

        Ok(tale)
    }
}
