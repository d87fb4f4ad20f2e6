//! Message service
//!
//! Handles reading chat history and sending messages.

use chat_core::entities::NewMessage;
use chat_core::EntityId;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{MessageListResponse, MessageResponse, SendMessageRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the full history of a chat, oldest first
    ///
    /// Membership is not checked; an unknown chat yields an empty list.
    #[instrument(skip(self))]
    pub async fn list_messages(
        &self,
        chat_id: EntityId,
        viewer_id: EntityId,
    ) -> ServiceResult<MessageListResponse> {
        let messages = self.ctx.message_repo().find_by_chat(chat_id).await?;

        Ok(MessageListResponse {
            messages: messages
                .into_iter()
                .map(|m| MessageResponse::for_viewer(m, viewer_id))
                .collect(),
        })
    }

    /// Send a message to a chat
    #[instrument(skip(self, request))]
    pub async fn send_message(
        &self,
        sender_id: EntityId,
        request: SendMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        request
            .validate()
            .map_err(|_| ServiceError::validation(SendMessageRequest::INVALID))?;

        let chat_id = request.chat_id.unwrap_or_default();
        let new_message = NewMessage::new(chat_id, sender_id, request.trimmed_text());

        let message = self.ctx.message_repo().create(&new_message).await?;

        info!(
            message_id = %message.id,
            chat_id = %chat_id,
            sender_id = %sender_id,
            "Message sent"
        );

        Ok(MessageResponse::for_viewer(message, sender_id))
    }
}
