/**
 * Chat Message Data Structure
 *
 * This module defines the ChatMessage struct used for direct messages
 * between two identities, both in the conversation log and on the wire.
 *
 * Messages are immutable once created. The server assigns the id and
 * timestamp at routing time; clients never supply either.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A directed chat message between two identities
///
/// # Fields
/// * `id` - Server-assigned message id
/// * `from_id` - Sender identity
/// * `to_id` - Recipient identity
/// * `text` - Message content
/// * `timestamp` - Server time at routing
///
/// # Example
/// ```rust
/// use zcode::shared::ChatMessage;
/// use uuid::Uuid;
///
/// let alice = Uuid::new_v4();
/// let bob = Uuid::new_v4();
/// let message = ChatMessage::new(alice, bob, "yo".to_string());
///
/// assert_eq!(message.text, "yo");
/// assert!(message.involves(bob));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: Uuid,
    pub from_id: Uuid,
    pub to_id: Uuid,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new message stamped with the current UTC time
    pub fn new(from_id: Uuid, to_id: Uuid, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            from_id,
            to_id,
            text,
            timestamp: Utc::now(),
        }
    }

    /// Whether the identity is the sender or the recipient
    pub fn involves(&self, identity_id: Uuid) -> bool {
        self.from_id == identity_id || self.to_id == identity_id
    }
}
