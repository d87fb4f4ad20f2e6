//! Message entity - represents a chat message

use chrono::NaiveDateTime;

use crate::value_objects::{EntityId, MessageStatus};

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: EntityId,
    pub chat_id: EntityId,
    pub sender_id: EntityId,
    pub text: String,
    pub status: MessageStatus,
    pub created_at: NaiveDateTime,
    /// Distinct emoji attached to the message
    pub reactions: Vec<String>,
}

impl Message {
    /// Check if the message was sent by the given user
    #[inline]
    pub fn is_from(&self, user_id: EntityId) -> bool {
        self.sender_id == user_id
    }
}

/// A message about to be inserted. The id and timestamp are assigned by the
/// database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub chat_id: EntityId,
    pub sender_id: EntityId,
    pub text: String,
}

impl NewMessage {
    /// Create a new message with trimmed text
    pub fn new(chat_id: EntityId, sender_id: EntityId, text: &str) -> Self {
        Self {
            chat_id,
            sender_id,
            text: text.trim().to_string(),
        }
    }

    /// Status every new message starts with
    #[inline]
    pub fn initial_status() -> MessageStatus {
        MessageStatus::Sent
    }
}
