//! Integration test utilities for the chat backend
//!
//! Spawns the HTTP server against a real PostgreSQL database and seeds the
//! tables it reads from.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
