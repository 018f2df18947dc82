/**
 * Presence Directory
 *
 * This module tracks which identities currently have a live channel. Each
 * identity has at most one registered channel; registering again replaces
 * the previous one.
 *
 * Every register and unregister pushes a `presence` snapshot (all
 * identities with their online flag and points) to every live channel.
 */

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::auth::users::IdentityStore;
use crate::backend::realtime::broadcast::{fan_out, ChannelHandle};
use crate::shared::{IdentitySummary, ServerFrame};

/// Shared handle to the presence directory
#[derive(Clone, Debug)]
pub struct PresenceDirectory {
    channels: Arc<RwLock<HashMap<Uuid, ChannelHandle>>>,
    identities: IdentityStore,
}

impl PresenceDirectory {
    pub fn new(identities: IdentityStore) -> Self {
        Self {
            channels: Arc::new(RwLock::new(HashMap::new())),
            identities,
        }
    }

    /// Register a channel for an identity, replacing any previous one
    pub async fn register(&self, identity_id: Uuid, handle: ChannelHandle) {
        let replaced = self.channels.write().await.insert(identity_id, handle);
        match replaced {
            Some(old) => tracing::info!(
                "[Presence] {} re-registered, replacing connection {}",
                identity_id,
                old.connection_id()
            ),
            None => tracing::info!("[Presence] {} is online", identity_id),
        }

        self.broadcast_presence().await;
    }

    /// Remove an identity's channel when its connection closes
    ///
    /// Only removes the entry if it still belongs to `connection_id`, so a
    /// replaced connection closing late cannot evict its successor.
    pub async fn unregister(&self, identity_id: Uuid, connection_id: Uuid) -> bool {
        let removed = {
            let mut channels = self.channels.write().await;
            match channels.get(&identity_id) {
                Some(handle) if handle.connection_id() == connection_id => {
                    channels.remove(&identity_id);
                    true
                }
                _ => false,
            }
        };

        if removed {
            tracing::info!("[Presence] {} is offline", identity_id);
            self.broadcast_presence().await;
        }
        removed
    }

    /// The identity's active channel, if any
    pub async fn lookup(&self, identity_id: Uuid) -> Option<ChannelHandle> {
        self.channels.read().await.get(&identity_id).cloned()
    }

    pub async fn is_online(&self, identity_id: Uuid) -> bool {
        self.channels.read().await.contains_key(&identity_id)
    }

    pub async fn online_ids(&self) -> HashSet<Uuid> {
        self.channels.read().await.keys().copied().collect()
    }

    /// Online/points view of every identity
    pub async fn snapshot(&self) -> Vec<IdentitySummary> {
        let online = self.online_ids().await;
        self.identities.directory(&online).await
    }

    /// Deliver a frame to one identity's channel
    ///
    /// Returns false when the identity is offline or its channel has closed;
    /// a closed channel is removed.
    pub async fn send_to(&self, identity_id: Uuid, frame: ServerFrame) -> bool {
        let Some(handle) = self.lookup(identity_id).await else {
            return false;
        };
        if handle.send(frame) {
            return true;
        }
        self.prune(&[(identity_id, handle.connection_id())]).await;
        false
    }

    /// Deliver a frame to every registered channel
    ///
    /// Closed channels met along the way are removed. Returns the number of
    /// channels the frame was queued on.
    pub async fn broadcast(&self, frame: ServerFrame) -> usize {
        let result = {
            let channels = self.channels.read().await;
            fan_out(channels.iter(), &frame)
        };
        if !result.dead.is_empty() {
            self.prune(&result.dead).await;
        }
        result.delivered
    }

    /// Push the current presence snapshot to every channel
    pub async fn broadcast_presence(&self) -> usize {
        let identities = self.snapshot().await;
        self.broadcast(ServerFrame::Presence { identities }).await
    }

    async fn prune(&self, dead: &[(Uuid, Uuid)]) {
        let mut channels = self.channels.write().await;
        for (identity_id, connection_id) in dead {
            if channels
                .get(identity_id)
                .is_some_and(|handle| handle.connection_id() == *connection_id)
            {
                channels.remove(identity_id);
                tracing::debug!("[Presence] Removed closed channel of {}", identity_id);
            }
        }
    }
}
