//! JSON body extractor

use serde::de::DeserializeOwned;

use crate::event::ApiEvent;
use crate::response::{ApiError, ApiResult};

/// Parse the event body as JSON
///
/// A missing or blank body is read as `{}` so that absent fields surface as
/// validation errors. Anything else that fails to parse is a malformed body.
pub fn json_body<T: DeserializeOwned>(event: &ApiEvent) -> ApiResult<T> {
    let body = event.decoded_body()?;
    let text = match body.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text,
        _ => "{}",
    };

    serde_json::from_str(text).map_err(|e| ApiError::MalformedBody(e.to_string()))
}
