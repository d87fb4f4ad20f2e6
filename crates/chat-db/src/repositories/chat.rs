//! PostgreSQL implementation of ChatRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chat_core::entities::ChatSummary;
use chat_core::traits::{ChatRepository, RepoResult};
use chat_core::value_objects::EntityId;

use crate::models::ChatSummaryModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ChatRepository
#[derive(Clone)]
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    /// Create a new PgChatRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    #[instrument(skip(self))]
    async fn find_summaries_for_member(&self, user_id: EntityId) -> RepoResult<Vec<ChatSummary>> {
        // The peer is the non-requesting member with the lowest user id, so
        // group chats report a stable online flag. A NULL status counts as
        // unread. DISTINCT collapses duplicate membership rows.
        let results = sqlx::query_as::<_, ChatSummaryModel>(
            r#"
            SELECT DISTINCT
                   c.id::bigint AS id,
                   c.name,
                   c.avatar,
                   COALESCE(c.is_group, FALSE) AS is_group,
                   (SELECT m.text FROM messages m
                     WHERE m.chat_id = c.id
                     ORDER BY m.created_at DESC, m.id DESC LIMIT 1) AS last_message,
                   (SELECT m.created_at::timestamp FROM messages m
                     WHERE m.chat_id = c.id
                     ORDER BY m.created_at DESC, m.id DESC LIMIT 1) AS last_message_time,
                   (SELECT COUNT(*) FROM messages m
                     WHERE m.chat_id = c.id
                       AND m.sender_id <> $1
                       AND m.status IS DISTINCT FROM 'read') AS unread_count,
                   COALESCE(cm.pinned, FALSE) AS pinned,
                   COALESCE(cm.muted, FALSE) AS muted,
                   COALESCE((SELECT u.online FROM users u
                     WHERE u.id = (SELECT peer.user_id FROM chat_members peer
                                    WHERE peer.chat_id = c.id AND peer.user_id <> $1
                                    ORDER BY peer.user_id LIMIT 1)), FALSE) AS online
            FROM chats c
            JOIN chat_members cm ON cm.chat_id = c.id
            WHERE cm.user_id = $1
            ORDER BY last_message_time DESC NULLS LAST, id ASC
            "#,
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ChatSummary::from).collect())
    }
}
