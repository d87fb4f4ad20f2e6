//! Repository traits (ports)

mod repositories;

pub use repositories::{ChatRepository, MessageRepository, ReactionRepository, RepoResult};
