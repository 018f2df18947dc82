use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::shared::ChatMessage;

/// Unordered pair of identities; `(a, b)` and `(b, a)` map to the same key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationKey(Uuid, Uuid);

impl ConversationKey {
    pub fn new(a: Uuid, b: Uuid) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    pub fn participants(&self) -> (Uuid, Uuid) {
        (self.0, self.1)
    }
}

/// In-memory message log per conversation
///
/// Kept for history queries only; live delivery never depends on it.
#[derive(Clone, Debug, Default)]
pub struct ConversationLog {
    conversations: Arc<RwLock<HashMap<ConversationKey, Vec<ChatMessage>>>>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, message: ChatMessage) {
        let key = ConversationKey::new(message.from_id, message.to_id);
        self.conversations
            .write()
            .await
            .entry(key)
            .or_default()
            .push(message);
    }

    /// Messages between two identities, oldest first
    pub async fn history(&self, a: Uuid, b: Uuid) -> Vec<ChatMessage> {
        self.conversations
            .read()
            .await
            .get(&ConversationKey::new(a, b))
            .cloned()
            .unwrap_or_default()
    }

    /// Number of conversations with at least one message
    pub async fn conversation_count(&self) -> usize {
        self.conversations.read().await.len()
    }
}
