//! Wire schema of the chat proxy.
//!
//! DESIGN
//! ======
//! Field names mirror the backend exactly so serde round-trips stay
//! lossless; the reply is an `ok`-envelope where failure detail rides in
//! the body rather than the HTTP status.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Channel tag the backend expects from browser-originated messages.
pub const WEB_CHANNEL: &str = "WEB_CHAT";

/// Message posted to the chat proxy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatSendRequest {
    /// Message text; the proxy rejects blank text.
    pub text: String,
    /// Display name of the sender.
    pub username: String,
    /// Stable conversation identifier for the backend.
    pub external_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_rol: Option<String>,
    /// Raw attachment payload forwarded untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments_raw: Option<serde_json::Value>,
    pub has_voice: bool,
    pub channel: String,
}

impl ChatSendRequest {
    /// Request for `text` from `username` with the web-channel defaults:
    /// `external_id` is derived as `WEB-<username>`.
    #[must_use]
    pub fn new(text: impl Into<String>, username: impl Into<String>) -> Self {
        let username = username.into();
        let external_id = format!("WEB-{username}");
        Self {
            text: text.into(),
            username,
            external_id,
            identity_id: None,
            identity_rol: None,
            attachments_raw: None,
            has_voice: false,
            channel: WEB_CHANNEL.to_owned(),
        }
    }
}

/// Reply envelope from the chat proxy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub reply_text: Option<String>,
    #[serde(default)]
    pub reply_voice: Option<String>,
    #[serde(default)]
    pub audio_filename: Option<String>,
    #[serde(default)]
    pub media_url: Option<String>,
    /// Status the backend answered the proxy with, for debugging.
    #[serde(default)]
    pub backend_status: Option<u16>,
}
