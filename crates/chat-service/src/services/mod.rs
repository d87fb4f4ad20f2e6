//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] for the duration of a
//! single request.

pub mod chat;
pub mod context;
pub mod error;
pub mod message;
pub mod reaction;

pub use chat::ChatService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use reaction::ReactionService;
