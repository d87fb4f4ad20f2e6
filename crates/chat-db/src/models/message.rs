//! Message database models

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Database model for a message with its aggregated reactions
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub chat_id: i64,
    pub sender_id: i64,
    pub text: String,
    pub status: Option<String>,
    pub created_at: NaiveDateTime,
    pub reactions: Vec<String>,
}

/// Columns returned by the message insert
#[derive(Debug, Clone, FromRow)]
pub struct InsertedMessageModel {
    pub id: i64,
    pub created_at: NaiveDateTime,
}
