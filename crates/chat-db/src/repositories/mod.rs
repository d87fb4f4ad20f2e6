//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in chat-core.

mod chat;
mod error;
mod message;
mod reaction;

pub use chat::PgChatRepository;
pub use message::PgMessageRepository;
pub use reaction::PgReactionRepository;
