//! # chat-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `chat-core`. It handles:
//!
//! - Connection pool management
//! - Row models with SQLx `FromRow` derives
//! - Model → entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chat_db::{create_pool, PgChatRepository, PoolConfig};
//! use chat_core::traits::ChatRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::new("postgres://localhost/chat"))?;
//!     let chats = PgChatRepository::new(pool);
//!     let summaries = chats.find_summaries_for_member(6.into()).await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{check_connection, create_pool, PgPool, PoolConfig};
pub use repositories::{PgChatRepository, PgMessageRepository, PgReactionRepository};
