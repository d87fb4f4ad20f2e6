//! Response types and error handling for the request handler
//!
//! Every failure is converted into an [`ApiResponse`] with a `{"error": ...}`
//! body at one place, [`ApiError::into_api_response`].

use axum::http::StatusCode;
use chat_service::ServiceError;
use thiserror::Error;
use tracing::{debug, error};

use crate::event::ApiResponse;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected input; the message is sent to the client as is
    #[error("{0}")]
    Validation(String),

    #[error("Not found")]
    RouteNotFound,

    /// Body that is not valid JSON for the endpoint
    #[error("{0}")]
    MalformedBody(String),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::RouteNotFound => StatusCode::NOT_FOUND,
            Self::Service(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::MalformedBody(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::RouteNotFound => "NOT_FOUND",
            Self::MalformedBody(_) => "MALFORMED_BODY",
            Self::Service(e) => e.error_code(),
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    /// Create a validation error for an unparsable path parameter
    pub fn invalid_param(name: &str) -> Self {
        Self::Validation(format!("Invalid {name}"))
    }

    /// Convert into the response sent to the client, logging server errors
    pub fn into_api_response(self) -> ApiResponse {
        let status = self.status_code();

        if status.is_server_error() {
            error!(code = self.error_code(), error = %self, "Request failed");
        } else {
            debug!(code = self.error_code(), error = %self, "Request rejected");
        }

        error_response(status, &self.to_string())
    }
}

/// Build a `{"error": message}` response
pub fn error_response(status: StatusCode, message: &str) -> ApiResponse {
    let body = serde_json::json!({ "error": message }).to_string();
    ApiResponse::with_json_body(status, body)
}

/// Type alias for handler results
pub type ApiResult<T> = Result<T, ApiError>;
