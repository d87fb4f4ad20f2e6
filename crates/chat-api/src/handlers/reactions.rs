//! Reaction handlers

use axum::http::StatusCode;
use chat_core::EntityId;
use chat_service::{AddReactionRequest, ReactionService, ServiceContext};

use crate::event::{ApiEvent, ApiResponse};
use crate::extractors::json_body;
use crate::response::ApiResult;
use crate::routes::RouteMatch;

/// Add a reaction to a message
///
/// POST ?path=messages/{id}/react
pub async fn add_reaction(
    ctx: &ServiceContext,
    requester: EntityId,
    route: &RouteMatch,
    event: &ApiEvent,
) -> ApiResult<ApiResponse> {
    let message_id = route.id("id")?;
    let request: AddReactionRequest = json_body(event)?;
    let response = ReactionService::new(ctx)
        .add_reaction(message_id, requester, request)
        .await?;
    ApiResponse::json(StatusCode::OK, &response)
}
