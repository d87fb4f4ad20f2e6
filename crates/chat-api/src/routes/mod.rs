//! Route definitions
//!
//! Two levels of routing live here:
//! - the pseudo-route table that maps an event's method and `path` query
//!   parameter to an [`Endpoint`], and
//! - the Axum router that exposes the handler and health checks over HTTP.

use axum::{
    routing::{any, get},
    Router,
};
use chat_core::EntityId;

use crate::handlers::{health, invoke};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Operations served by the request handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    ListChats,
    ListMessages,
    SendMessage,
    AddReaction,
}

/// One entry of the route table. Pattern segments written as `{name}`
/// capture the matching path segment.
struct Route {
    method: &'static str,
    pattern: &'static str,
    endpoint: Endpoint,
}

const ROUTES: &[Route] = &[
    Route {
        method: "GET",
        pattern: "chats",
        endpoint: Endpoint::ListChats,
    },
    Route {
        method: "GET",
        pattern: "messages/{chatId}",
        endpoint: Endpoint::ListMessages,
    },
    Route {
        method: "POST",
        pattern: "messages",
        endpoint: Endpoint::SendMessage,
    },
    Route {
        method: "POST",
        pattern: "messages/{id}/react",
        endpoint: Endpoint::AddReaction,
    },
];

/// A matched route with its captured path parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub endpoint: Endpoint,
    params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    /// Raw value of a captured parameter
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// A captured parameter parsed as an id
    pub fn id(&self, name: &str) -> ApiResult<EntityId> {
        self.param(name)
            .and_then(|raw| EntityId::parse(raw).ok())
            .ok_or_else(|| ApiError::invalid_param(name))
    }
}

/// Find the endpoint for a method and pseudo-route
///
/// Leading and trailing slashes on the path are ignored. Empty segments
/// never match a parameter.
pub fn match_route(method: &str, path: &str) -> Option<RouteMatch> {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    ROUTES
        .iter()
        .filter(|route| route.method == method)
        .find_map(|route| match_pattern(route, &segments))
}

fn match_pattern(route: &Route, segments: &[&str]) -> Option<RouteMatch> {
    let pattern: Vec<&'static str> = route.pattern.split('/').collect();
    if pattern.len() != segments.len() {
        return None;
    }

    let mut params = Vec::new();
    for (expected, actual) in pattern.into_iter().zip(segments) {
        match expected.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
            Some(name) if !actual.is_empty() => params.push((name, (*actual).to_string())),
            Some(_) => return None,
            None if expected == *actual => {}
            None => return None,
        }
    }

    Some(RouteMatch {
        endpoint: route.endpoint,
        params,
    })
}

/// Create the HTTP router: the handler at `/` plus health checks
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", any(invoke::invoke))
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}
