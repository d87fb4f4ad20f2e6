//! Requester identity extractor

use chat_common::IdentityConfig;
use chat_core::EntityId;

use crate::event::ApiEvent;
use crate::response::{ApiError, ApiResult};

/// Resolve the requesting user from the identity header
///
/// An absent or blank header falls back to the configured default id. The
/// header is trusted as is; authentication happens in front of this service.
pub fn requester(event: &ApiEvent, identity: &IdentityConfig) -> ApiResult<EntityId> {
    match event
        .header(&identity.user_header)
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        Some(raw) => EntityId::parse(raw)
            .map_err(|_| ApiError::Validation(format!("Invalid {} header", identity.user_header))),
        None => Ok(identity.default_user_id),
    }
}
