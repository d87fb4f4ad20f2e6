//! Service context - dependency container for services
//!
//! Holds the connection pool and the repositories needed by services.

use std::sync::Arc;

use chat_core::traits::{ChatRepository, MessageRepository, ReactionRepository};
use chat_db::{PgChatRepository, PgMessageRepository, PgPool, PgReactionRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Cloning is cheap: the pool and repositories are reference counted.
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    chat_repo: Arc<dyn ChatRepository>,
    message_repo: Arc<dyn MessageRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,
}

impl ServiceContext {
    /// Create a new service context with explicit dependencies
    pub fn new(
        pool: PgPool,
        chat_repo: Arc<dyn ChatRepository>,
        message_repo: Arc<dyn MessageRepository>,
        reaction_repo: Arc<dyn ReactionRepository>,
    ) -> Self {
        Self {
            pool,
            chat_repo,
            message_repo,
            reaction_repo,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the chat repository
    pub fn chat_repo(&self) -> &dyn ChatRepository {
        self.chat_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the reaction repository
    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
///
/// Repositories that are not set fall back to the PostgreSQL implementations
/// over the configured pool.
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    chat_repo: Option<Arc<dyn ChatRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn chat_repo(mut self, repo: Arc<dyn ChatRepository>) -> Self {
        self.chat_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if no pool was provided
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let pool = self
            .pool
            .ok_or_else(|| ServiceError::internal("pool is required"))?;

        let chat_repo = self
            .chat_repo
            .unwrap_or_else(|| Arc::new(PgChatRepository::new(pool.clone())));
        let message_repo = self
            .message_repo
            .unwrap_or_else(|| Arc::new(PgMessageRepository::new(pool.clone())));
        let reaction_repo = self
            .reaction_repo
            .unwrap_or_else(|| Arc::new(PgReactionRepository::new(pool.clone())));

        Ok(ServiceContext::new(pool, chat_repo, message_repo, reaction_repo))
    }
}
