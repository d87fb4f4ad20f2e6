//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase keys.

use chat_core::{EntityId, MessageStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Chat Responses
// ============================================================================

/// One entry of the chat list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub id: EntityId,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub is_group: bool,
    /// Text of the most recent message, empty if none
    pub last_message: String,
    /// `HH:MM` of the most recent message, empty if none
    pub time: String,
    pub unread: i64,
    pub pinned: bool,
    pub muted: bool,
    pub online: bool,
}

/// Chat list response
#[derive(Debug, Clone, Serialize)]
pub struct ChatListResponse {
    pub chats: Vec<ChatResponse>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Message as seen by one viewer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: EntityId,
    pub text: String,
    pub time: String,
    pub is_own: bool,
    pub status: MessageStatus,
    pub reactions: Vec<String>,
}

/// Message history response
#[derive(Debug, Clone, Serialize)]
pub struct MessageListResponse {
    pub messages: Vec<MessageResponse>,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// Acknowledgement for a reaction, returned whether or not a row was written
#[derive(Debug, Clone, Serialize)]
pub struct ReactionAddedResponse {
    pub success: bool,
}

impl ReactionAddedResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
