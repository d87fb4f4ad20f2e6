//! HTTP adapter
//!
//! Translates an HTTP request into an [`ApiEvent`] for the request handler
//! and the resulting [`ApiResponse`] back into HTTP.

use std::collections::HashMap;

use axum::{
    body::{Body, Bytes},
    extract::{Query, State},
    http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::warn;

use crate::event::{ApiEvent, ApiResponse};
use crate::state::AppState;

/// Serve the request handler over HTTP
///
/// ANY /?path=...
pub async fn invoke(
    State(state): State<AppState>,
    method: Method,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResponse {
    let event = event_from_http(&method, query, &headers, &body);
    state.handler().handle(event).await
}

/// Build an event from the parts of an HTTP request
///
/// Bodies that are not UTF-8 are passed on base64-encoded.
pub fn event_from_http(
    method: &Method,
    query: HashMap<String, String>,
    headers: &HeaderMap,
    body: &Bytes,
) -> ApiEvent {
    let headers: HashMap<String, String> = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect();

    let (body, is_base64_encoded) = if body.is_empty() {
        (None, false)
    } else {
        match std::str::from_utf8(body) {
            Ok(text) => (Some(text.to_string()), false),
            Err(_) => (Some(STANDARD.encode(body)), true),
        }
    };

    ApiEvent {
        http_method: method.as_str().to_string(),
        query_string_parameters: Some(query),
        headers: Some(headers),
        body,
        is_base64_encoded,
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        for (name, value) in self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(&value),
            ) {
                (Ok(name), Ok(value)) => {
                    response.headers_mut().insert(name, value);
                }
                _ => warn!(header = %name, "Dropping invalid response header"),
            }
        }

        response
    }
}
