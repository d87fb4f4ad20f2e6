//! Chat handlers

use axum::http::StatusCode;
use chat_core::EntityId;
use chat_service::{ChatService, ServiceContext};

use crate::event::ApiResponse;
use crate::response::ApiResult;

/// List the requester's chats
///
/// GET ?path=chats
pub async fn list_chats(ctx: &ServiceContext, requester: EntityId) -> ApiResult<ApiResponse> {
    let response = ChatService::new(ctx).list_chats(requester).await?;
    ApiResponse::json(StatusCode::OK, &response)
}
