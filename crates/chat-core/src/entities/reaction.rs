//! Reaction entity - represents an emoji reaction on a message

use crate::value_objects::EntityId;

/// Reaction entity
///
/// The (message, user, emoji) triple is unique; adding the same reaction
/// twice leaves a single row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reaction {
    pub message_id: EntityId,
    pub user_id: EntityId,
    pub emoji: String,
}

impl Reaction {
    /// Create a new Reaction
    pub fn new(message_id: EntityId, user_id: EntityId, emoji: String) -> Self {
        Self {
            message_id,
            user_id,
            emoji,
        }
    }
}
