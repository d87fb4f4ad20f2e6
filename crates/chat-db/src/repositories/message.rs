//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use chat_core::entities::{Message, NewMessage};
use chat_core::traits::{MessageRepository, RepoResult};
use chat_core::value_objects::EntityId;

use crate::mappers::MessageInsert;
use crate::models::{InsertedMessageModel, MessageModel};

use super::error::map_db_error;

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_chat(&self, chat_id: EntityId) -> RepoResult<Vec<Message>> {
        let results = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT m.id::bigint AS id,
                   m.chat_id::bigint AS chat_id,
                   m.sender_id::bigint AS sender_id,
                   m.text,
                   m.status::text AS status,
                   m.created_at::timestamp AS created_at,
                   COALESCE(
                       ARRAY_AGG(DISTINCT mr.emoji::text) FILTER (WHERE mr.emoji IS NOT NULL),
                       ARRAY[]::text[]
                   ) AS reactions
            FROM messages m
            LEFT JOIN message_reactions mr ON mr.message_id = m.id
            WHERE m.chat_id = $1
            GROUP BY m.id, m.chat_id, m.sender_id, m.text, m.status, m.created_at
            ORDER BY m.created_at ASC, m.id ASC
            "#,
        )
        .bind(chat_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self, message), fields(chat_id = %message.chat_id))]
    async fn create(&self, message: &NewMessage) -> RepoResult<Message> {
        let insert = MessageInsert::new(message);

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let inserted = sqlx::query_as::<_, InsertedMessageModel>(
            r#"
            INSERT INTO messages (chat_id, sender_id, text, status, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING id::bigint AS id, created_at::timestamp AS created_at
            "#,
        )
        .bind(insert.chat_id)
        .bind(insert.sender_id)
        .bind(insert.text)
        .bind(insert.status.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(insert.into_message(inserted))
    }
}
