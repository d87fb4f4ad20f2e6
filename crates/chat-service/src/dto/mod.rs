//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use mappers::format_time;
pub use requests::{AddReactionRequest, SendMessageRequest};
pub use responses::{
    ChatListResponse, ChatResponse, HealthChecks, HealthResponse, MessageListResponse,
    MessageResponse, ReactionAddedResponse, ReadinessResponse,
};
