//! # chat-api
//!
//! Request handler for the chat backend and the Axum server that exposes it.
//!
//! The handler consumes an [`ApiEvent`] (method, `path` query parameter,
//! headers, body) and produces an [`ApiResponse`]. The HTTP server translates
//! real requests into events and responses back into HTTP.

pub mod event;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

#[cfg(test)]
mod test_support;

pub use event::{ApiEvent, ApiResponse};
pub use handlers::RequestHandler;
pub use response::{ApiError, ApiResult};
pub use routes::{Endpoint, RouteMatch};
pub use server::{create_app, create_app_state, run};
pub use state::AppState;
