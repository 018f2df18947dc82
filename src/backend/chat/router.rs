/**
 * Message Router
 *
 * This module routes a directed chat message from one identity to another.
 *
 * # Delivery
 *
 * Delivery is best-effort. If the recipient has a live channel the message
 * is pushed to it immediately as a `chat` frame; otherwise it is only kept
 * in the conversation log and is never redelivered when the recipient
 * connects later. The sender always gets a `chat_ack` echo so it can render
 * its own message without a separate read.
 *
 * # Ordering
 *
 * Frames for one recipient leave in the order `route` calls complete. No
 * ordering is promised across different senders.
 */

use uuid::Uuid;

use crate::backend::auth::users::IdentityStore;
use crate::backend::chat::log::ConversationLog;
use crate::backend::error::{BackendError, BackendResult};
use crate::backend::realtime::broadcast::ChannelHandle;
use crate::backend::realtime::presence::PresenceDirectory;
use crate::shared::error::require_text;
use crate::shared::{ChatMessage, ServerFrame};

#[derive(Clone, Debug)]
pub struct MessageRouter {
    identities: IdentityStore,
    presence: PresenceDirectory,
    log: ConversationLog,
    message_reward: u64,
}

impl MessageRouter {
    pub fn new(
        identities: IdentityStore,
        presence: PresenceDirectory,
        log: ConversationLog,
        message_reward: u64,
    ) -> Self {
        Self {
            identities,
            presence,
            log,
            message_reward,
        }
    }

    /// Route a message from `from_id` to `to_id`
    ///
    /// The acknowledgment goes to `origin` when given (the connection the
    /// message arrived on), otherwise to the sender's registered channel.
    ///
    /// # Errors
    ///
    /// * `InvalidParticipant` - sender or recipient is not a known identity
    /// * `InvalidInput` - text is blank
    pub async fn route(
        &self,
        from_id: Uuid,
        to_id: Uuid,
        text: &str,
        origin: Option<&ChannelHandle>,
    ) -> BackendResult<ChatMessage> {
        for id in [from_id, to_id] {
            if !self.identities.exists(id).await {
                return Err(BackendError::invalid_participant(format!("unknown identity {}", id)));
            }
        }
        // the message keeps the sender's exact text; trimming only decides blankness
        require_text("text", Some(text))?;

        let message = ChatMessage::new(from_id, to_id, text.to_string());
        self.log.append(message.clone()).await;

        if let Err(e) = self.identities.award(from_id, self.message_reward).await {
            tracing::warn!("[Chat] Could not reward sender {}: {}", from_id, e);
        }

        let delivered = self
            .presence
            .send_to(to_id, ServerFrame::Chat { message: message.clone() })
            .await;
        if delivered {
            tracing::debug!("[Chat] Delivered message {} to {}", message.id, to_id);
        } else {
            tracing::debug!("[Chat] {} is offline; message {} logged only", to_id, message.id);
        }

        let ack = ServerFrame::ChatAck { message: message.clone() };
        match origin {
            Some(channel) => {
                channel.send(ack);
            }
            None => {
                self.presence.send_to(from_id, ack).await;
            }
        }

        Ok(message)
    }

    /// Conversation between two identities, oldest first
    pub async fn history(&self, a: Uuid, b: Uuid) -> BackendResult<Vec<ChatMessage>> {
        if !self.identities.exists(b).await {
            return Err(BackendError::not_found(format!("identity {}", b)));
        }
        Ok(self.log.history(a, b).await)
    }
}
