//! Domain entities - core business objects

mod chat;
mod message;
mod reaction;

pub use chat::{Chat, ChatSummary, LastMessage, MemberPreferences};
pub use message::{Message, NewMessage};
pub use reaction::Reaction;
