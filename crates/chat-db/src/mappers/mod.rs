//! Model to entity mappers
//!
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod chat;
mod message;

pub use message::MessageInsert;
