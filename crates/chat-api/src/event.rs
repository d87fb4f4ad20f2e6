//! Invocation contract
//!
//! [`ApiEvent`] is what the handler receives and [`ApiResponse`] is what it
//! returns. Both use camelCase JSON so they can be exchanged with a
//! function-style serving platform as well as built from HTTP requests.

use std::collections::{BTreeMap, HashMap};

use axum::http::StatusCode;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::response::{ApiError, ApiResult};

/// Headers allowed by cross-origin preflight
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, X-User-Id";

/// Methods allowed by cross-origin preflight
pub const CORS_ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// How long browsers may cache a preflight answer, in seconds
pub const CORS_MAX_AGE: &str = "86400";

/// Inbound request description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiEvent {
    #[serde(default = "default_method")]
    pub http_method: String,
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

fn default_method() -> String {
    "GET".to_string()
}

impl Default for ApiEvent {
    fn default() -> Self {
        Self {
            http_method: default_method(),
            query_string_parameters: None,
            headers: None,
            body: None,
            is_base64_encoded: false,
        }
    }
}

impl ApiEvent {
    /// Create an event for a method and pseudo-route
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        let mut query = HashMap::new();
        query.insert("path".to_string(), path.into());
        Self {
            http_method: method.into(),
            query_string_parameters: Some(query),
            ..Self::default()
        }
    }

    /// Add a header
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set a plain-text body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.is_base64_encoded = false;
        self
    }

    /// The pseudo-route from the `path` query parameter, empty when absent
    pub fn path(&self) -> &str {
        self.query_string_parameters
            .as_ref()
            .and_then(|q| q.get("path"))
            .map_or("", String::as_str)
    }

    /// Look up a header by name, ignoring case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.as_ref().and_then(|headers| {
            headers
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        })
    }

    /// The body as text, decoding base64 when flagged. `None` when absent.
    pub fn decoded_body(&self) -> ApiResult<Option<String>> {
        let Some(body) = self.body.as_deref() else {
            return Ok(None);
        };

        if !self.is_base64_encoded {
            return Ok(Some(body.to_string()));
        }

        let bytes = STANDARD
            .decode(body)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))?;
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|e| ApiError::MalformedBody(e.to_string()))
    }
}

/// Outbound response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl ApiResponse {
    /// Empty 200 answer to a cross-origin preflight
    pub fn preflight() -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());
        headers.insert(
            "Access-Control-Allow-Methods".to_string(),
            CORS_ALLOW_METHODS.to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Headers".to_string(),
            CORS_ALLOW_HEADERS.to_string(),
        );
        headers.insert("Access-Control-Max-Age".to_string(), CORS_MAX_AGE.to_string());

        Self {
            status_code: StatusCode::OK.as_u16(),
            headers,
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    /// JSON response with the standard headers
    pub fn json<T: Serialize>(status: StatusCode, value: &T) -> ApiResult<Self> {
        let body = serde_json::to_string(value).map_err(ApiError::internal)?;
        Ok(Self::with_json_body(status, body))
    }

    /// Response around an already serialized JSON body
    pub(crate) fn with_json_body(status: StatusCode, body: String) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert("Access-Control-Allow-Origin".to_string(), "*".to_string());

        Self {
            status_code: status.as_u16(),
            headers,
            body,
            is_base64_encoded: false,
        }
    }

    /// Parse the body as JSON
    pub fn json_body(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(&self.body)
    }
}
