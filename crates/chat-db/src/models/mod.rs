//! Database models - SQLx-compatible structs for query rows

mod chat;
mod message;

pub use chat::ChatSummaryModel;
pub use message::{InsertedMessageModel, MessageModel};
