//! Message model <-> entity mapper

use chat_core::entities::{Message, NewMessage};
use chat_core::value_objects::{EntityId, MessageStatus};

use crate::models::{InsertedMessageModel, MessageModel};

/// Convert MessageModel to Message entity
impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: EntityId::new(model.id),
            chat_id: EntityId::new(model.chat_id),
            sender_id: EntityId::new(model.sender_id),
            text: model.text,
            status: model.status.map(MessageStatus::from).unwrap_or_default(),
            created_at: model.created_at,
            reactions: model.reactions,
        }
    }
}

/// Values bound by the message insert
pub struct MessageInsert<'a> {
    pub chat_id: i64,
    pub sender_id: i64,
    pub text: &'a str,
    pub status: MessageStatus,
}

impl<'a> MessageInsert<'a> {
    pub fn new(message: &'a NewMessage) -> Self {
        Self {
            chat_id: message.chat_id.into_inner(),
            sender_id: message.sender_id.into_inner(),
            text: &message.text,
            status: NewMessage::initial_status(),
        }
    }

    /// Build the stored message from the insert and the generated columns
    pub fn into_message(self, inserted: InsertedMessageModel) -> Message {
        Message {
            id: EntityId::new(inserted.id),
            chat_id: EntityId::new(self.chat_id),
            sender_id: EntityId::new(self.sender_id),
            text: self.text.to_string(),
            status: self.status,
            created_at: inserted.created_at,
            reactions: Vec::new(),
        }
    }
}
