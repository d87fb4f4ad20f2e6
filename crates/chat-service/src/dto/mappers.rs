//! Entity to DTO mappers

use chat_core::entities::{ChatSummary, Message};
use chat_core::EntityId;
use chrono::NaiveDateTime;

use super::responses::{ChatResponse, MessageResponse};

/// Render a timestamp as `HH:MM`
pub fn format_time(at: NaiveDateTime) -> String {
    at.format("%H:%M").to_string()
}

impl From<ChatSummary> for ChatResponse {
    fn from(summary: ChatSummary) -> Self {
        let (last_message, time) = match summary.last_message {
            Some(last) => (last.text, format_time(last.sent_at)),
            None => (String::new(), String::new()),
        };

        Self {
            id: summary.chat.id,
            name: summary.chat.name,
            avatar: summary.chat.avatar,
            is_group: summary.chat.is_group,
            last_message,
            time,
            unread: summary.unread_count,
            pinned: summary.preferences.pinned,
            muted: summary.preferences.muted,
            online: summary.peer_online,
        }
    }
}

impl MessageResponse {
    /// Build the response for a message as seen by `viewer`
    pub fn for_viewer(message: Message, viewer: EntityId) -> Self {
        Self {
            is_own: message.is_from(viewer),
            time: format_time(message.created_at),
            id: message.id,
            text: message.text,
            status: message.status,
            reactions: message.reactions,
        }
    }
}
