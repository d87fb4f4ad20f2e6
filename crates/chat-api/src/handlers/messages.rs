//! Message handlers

use axum::http::StatusCode;
use chat_core::EntityId;
use chat_service::{MessageService, SendMessageRequest, ServiceContext};

use crate::event::{ApiEvent, ApiResponse};
use crate::extractors::json_body;
use crate::response::ApiResult;
use crate::routes::RouteMatch;

/// Get the message history of a chat
///
/// GET ?path=messages/{chatId}
pub async fn list_messages(
    ctx: &ServiceContext,
    requester: EntityId,
    route: &RouteMatch,
) -> ApiResult<ApiResponse> {
    let chat_id = route.id("chatId")?;
    let response = MessageService::new(ctx)
        .list_messages(chat_id, requester)
        .await?;
    ApiResponse::json(StatusCode::OK, &response)
}

/// Send a message
///
/// POST ?path=messages
pub async fn send_message(
    ctx: &ServiceContext,
    requester: EntityId,
    event: &ApiEvent,
) -> ApiResult<ApiResponse> {
    let request: SendMessageRequest = json_body(event)?;
    let response = MessageService::new(ctx)
        .send_message(requester, request)
        .await?;
    ApiResponse::json(StatusCode::CREATED, &response)
}
