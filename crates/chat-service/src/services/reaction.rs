//! Reaction service
//!
//! Handles adding emoji reactions to messages.

use chat_core::entities::Reaction;
use chat_core::EntityId;
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::dto::{AddReactionRequest, ReactionAddedResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add reaction to a message
    ///
    /// Reacting twice with the same emoji is a no-op and still succeeds.
    #[instrument(skip(self, request))]
    pub async fn add_reaction(
        &self,
        message_id: EntityId,
        user_id: EntityId,
        request: AddReactionRequest,
    ) -> ServiceResult<ReactionAddedResponse> {
        request
            .validate()
            .map_err(|_| ServiceError::validation(AddReactionRequest::INVALID))?;

        let emoji = request.emoji.unwrap_or_default();
        let reaction = Reaction::new(message_id, user_id, emoji);

        if self.ctx.reaction_repo().create(&reaction).await? {
            info!(
                message_id = %message_id,
                user_id = %user_id,
                emoji = %reaction.emoji,
                "Reaction added"
            );
        } else {
            debug!(message_id = %message_id, user_id = %user_id, "Reaction already present");
        }

        Ok(ReactionAddedResponse::ok())
    }
}
