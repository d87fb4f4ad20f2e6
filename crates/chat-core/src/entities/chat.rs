//! Chat entity - a conversation between two or more users

use chrono::NaiveDateTime;

use crate::value_objects::EntityId;

/// Chat entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: EntityId,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub is_group: bool,
}

/// Per-member preferences stored on `chat_members`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberPreferences {
    pub pinned: bool,
    pub muted: bool,
}

/// Most recent message of a chat, used as a list preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastMessage {
    pub text: String,
    pub sent_at: NaiveDateTime,
}

/// A chat as seen by one of its members in the chat list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSummary {
    pub chat: Chat,
    pub last_message: Option<LastMessage>,
    /// Messages from other members not yet marked read
    pub unread_count: i64,
    pub preferences: MemberPreferences,
    /// Online flag of the other participant (lowest user id among the
    /// non-requesting members)
    pub peer_online: bool,
}
