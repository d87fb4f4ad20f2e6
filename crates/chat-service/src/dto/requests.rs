//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Every field is optional on the wire so that a missing field is reported as
//! a validation failure rather than a decoding failure.

use chat_core::EntityId;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

/// Send message request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_send_message"))]
pub struct SendMessageRequest {
    #[serde(default)]
    pub chat_id: Option<EntityId>,

    #[serde(default)]
    pub text: Option<String>,
}

impl SendMessageRequest {
    /// Error returned for a missing chat or blank text
    pub const INVALID: &'static str = "Missing chatId or text";

    /// Text with surrounding whitespace removed
    pub fn trimmed_text(&self) -> &str {
        self.text.as_deref().map_or("", str::trim)
    }
}

fn validate_send_message(request: &SendMessageRequest) -> Result<(), ValidationError> {
    let has_chat = request.chat_id.is_some_and(|id| !id.is_zero());
    if has_chat && !request.trimmed_text().is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new("required").with_message(SendMessageRequest::INVALID.into()))
    }
}

/// Add reaction request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddReactionRequest {
    /// Emoji is stored as given, without trimming. A non-string value reads
    /// as absent.
    #[serde(default, deserialize_with = "string_or_none")]
    #[validate(
        required(message = "Missing emoji"),
        length(min = 1, message = "Missing emoji")
    )]
    pub emoji: Option<String>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Text(String),
        Other(IgnoredAny),
    }

    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(text)) => Some(text),
        Some(Loose::Other(_)) | None => None,
    })
}

impl AddReactionRequest {
    /// Error returned for a missing or empty emoji
    pub const INVALID: &'static str = "Missing emoji";
}
