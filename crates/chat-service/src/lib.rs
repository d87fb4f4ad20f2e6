//! # chat-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AddReactionRequest, ChatListResponse, ChatResponse, HealthResponse, MessageListResponse,
    MessageResponse, ReactionAddedResponse, ReadinessResponse, SendMessageRequest,
};
pub use services::{
    ChatService, MessageService, ReactionService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
