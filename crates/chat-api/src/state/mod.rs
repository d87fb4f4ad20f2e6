//! Application state
//!
//! Holds the shared state for the Axum application: the request handler and
//! the configuration it was built from.

use std::sync::Arc;

use chat_common::AppConfig;
use chat_service::ServiceContext;

use crate::handlers::RequestHandler;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Request handler with its service context
    handler: Arc<RequestHandler>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let handler = RequestHandler::new(service_context, config.identity.clone());
        Self {
            handler: Arc::new(handler),
            config: Arc::new(config),
        }
    }

    /// Get the request handler
    pub fn handler(&self) -> &RequestHandler {
        &self.handler
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        self.handler.context()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("handler", &"RequestHandler")
            .field("config", &"AppConfig")
            .finish()
    }
}
