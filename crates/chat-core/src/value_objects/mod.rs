//! Value objects - immutable types that represent domain concepts

mod entity_id;
mod message_status;

pub use entity_id::{EntityId, EntityIdParseError};
pub use message_status::MessageStatus;
