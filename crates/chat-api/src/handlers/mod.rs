//! Request handlers
//!
//! [`RequestHandler`] is the single entry point: it answers preflight
//! requests, routes everything else by method and `path`, and turns every
//! failure into a JSON error response.

pub mod chats;
pub mod health;
pub mod invoke;
pub mod messages;
pub mod reactions;

use chat_common::IdentityConfig;
use chat_service::ServiceContext;
use tracing::{debug, instrument};

use crate::event::{ApiEvent, ApiResponse};
use crate::extractors::requester;
use crate::response::{ApiError, ApiResult};
use crate::routes::{match_route, Endpoint};

/// Handles one event at a time against the shared service context
pub struct RequestHandler {
    ctx: ServiceContext,
    identity: IdentityConfig,
}

impl RequestHandler {
    pub fn new(ctx: ServiceContext, identity: IdentityConfig) -> Self {
        Self { ctx, identity }
    }

    /// Get the service context
    pub fn context(&self) -> &ServiceContext {
        &self.ctx
    }

    /// Handle one event. Never fails: errors become error responses.
    #[instrument(skip_all, fields(method = %event.http_method, path = %event.path()))]
    pub async fn handle(&self, event: ApiEvent) -> ApiResponse {
        if event.http_method == "OPTIONS" {
            return ApiResponse::preflight();
        }

        match self.dispatch(&event).await {
            Ok(response) => {
                debug!(status = response.status_code, "Request handled");
                response
            }
            Err(err) => err.into_api_response(),
        }
    }

    async fn dispatch(&self, event: &ApiEvent) -> ApiResult<ApiResponse> {
        let route =
            match_route(&event.http_method, event.path()).ok_or(ApiError::RouteNotFound)?;
        let requester = requester(event, &self.identity)?;

        match route.endpoint {
            Endpoint::ListChats => chats::list_chats(&self.ctx, requester).await,
            Endpoint::ListMessages => messages::list_messages(&self.ctx, requester, &route).await,
            Endpoint::SendMessage => messages::send_message(&self.ctx, requester, event).await,
            Endpoint::AddReaction => {
                reactions::add_reaction(&self.ctx, requester, &route, event).await
            }
        }
    }
}

impl std::fmt::Debug for RequestHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestHandler")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
