//! Server setup and initialization
//!
//! Provides the application builder and the server runner.

use std::time::Duration;

use axum::Router;
use chat_common::{AppConfig, AppError, AppResult};
use chat_db::{create_pool, PoolConfig};
use chat_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config().api.request_timeout_secs);
    let router = create_router();
    let router = apply_middleware(router, timeout);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// The pool connects lazily, so the server starts even while the database
/// is unreachable; `/health/ready` reports it.
pub fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let pool = create_pool(&PoolConfig::from(&config.database)).map_err(AppError::database)?;
    info!(
        max_connections = config.database.max_connections,
        "PostgreSQL pool configured"
    );

    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .build()
        .map_err(AppError::internal)?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> AppResult<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    warn!(
        header = %config.identity.user_header,
        default_user_id = %config.identity.default_user_id,
        "Requester identity is taken from an unauthenticated header"
    );

    let state = create_app_state(config)?;
    let app = create_app(state);

    run_server(app, &addr).await
}
