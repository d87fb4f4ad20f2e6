//! Chat list database model

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// One row of the chat list query: a chat joined with the requester's
/// membership and aggregates over its messages
#[derive(Debug, Clone, FromRow)]
pub struct ChatSummaryModel {
    pub id: i64,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub is_group: bool,
    pub last_message: Option<String>,
    pub last_message_time: Option<NaiveDateTime>,
    pub unread_count: i64,
    pub pinned: bool,
    pub muted: bool,
    pub online: bool,
}
