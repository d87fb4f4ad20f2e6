//! Event extractors
//!
//! Pull the requester identity and a typed JSON body out of an [`ApiEvent`].
//!
//! [`ApiEvent`]: crate::event::ApiEvent

mod body;
mod identity;

pub use body::json_body;
pub use identity::requester;
