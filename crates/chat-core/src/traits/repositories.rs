//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every method runs on a single connection
//! that is released before it returns.

use async_trait::async_trait;

use crate::entities::{ChatSummary, Message, NewMessage, Reaction};
use crate::error::DomainError;
use crate::value_objects::EntityId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Chat Repository
// ============================================================================

#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// List every chat the user is a member of, most recently active first.
    /// Chats without messages come last.
    async fn find_summaries_for_member(&self, user_id: EntityId) -> RepoResult<Vec<ChatSummary>>;
}

// ============================================================================
// Message Repository
// ============================================================================

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// List the full history of a chat, oldest first, with distinct reactions
    async fn find_by_chat(&self, chat_id: EntityId) -> RepoResult<Vec<Message>>;

    /// Insert a message with status `sent` and a database-assigned timestamp,
    /// committing before returning the stored row
    async fn create(&self, message: &NewMessage) -> RepoResult<Message>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Add a reaction. Returns `false` when the identical reaction already
    /// existed and nothing was written.
    async fn create(&self, reaction: &Reaction) -> RepoResult<bool>;
}
