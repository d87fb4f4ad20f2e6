//! Chat service
//!
//! Builds the chat list for the requesting member.

use chat_core::EntityId;
use tracing::{debug, instrument};

use crate::dto::{ChatListResponse, ChatResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Chat service
pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    /// Create a new ChatService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List every chat the user belongs to, most recently active first
    #[instrument(skip(self))]
    pub async fn list_chats(&self, user_id: EntityId) -> ServiceResult<ChatListResponse> {
        let summaries = self.ctx.chat_repo().find_summaries_for_member(user_id).await?;

        debug!(count = summaries.len(), "Loaded chat list");

        Ok(ChatListResponse {
            chats: summaries.into_iter().map(ChatResponse::from).collect(),
        })
    }
}
