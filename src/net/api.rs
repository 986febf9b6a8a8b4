//! JSON POST helpers for the portal's two HTTP paths.
//!
//! Browser builds issue real HTTP calls via `gloo-net`; elsewhere the
//! helpers return an error since they are only meaningful in a page.
//!
//! ERROR HANDLING
//! ==============
//! The same-origin helper never inspects the response status; that path
//! talks to the portal's own trusted server. The authenticated remote
//! helper surfaces non-2xx statuses as a toast and STILL returns the
//! parsed body; failure is visual-only by contract. Transport and JSON
//! parse failures come back as `Err(String)`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::types::{ChatReply, ChatSendRequest};
use crate::platform::Platform;
use crate::session::store::SessionStore;
#[cfg(feature = "browser")]
use crate::session::store::bearer_header;

/// Same-origin path of the chat proxy.
pub const CHAT_SEND_PATH: &str = "/chat/api/send";

#[cfg(any(test, feature = "browser"))]
fn remote_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(any(test, feature = "browser"))]
fn http_error_message(status: u16) -> String {
    format!("Error {status}")
}

#[cfg(any(test, feature = "browser"))]
fn request_body(body: Option<Value>) -> Value {
    body.unwrap_or_else(|| Value::Object(serde_json::Map::new()))
}

#[cfg(any(test, feature = "browser"))]
fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Toast on failure statuses, then parse the body regardless.
#[cfg(any(test, feature = "browser"))]
fn finish_authenticated_response<P>(
    status: u16,
    body: &str,
    platform: &P,
) -> Result<Value, String>
where
    P: Platform + ?Sized,
{
    if !is_success(status) {
        #[cfg(feature = "browser")]
        log::warn!("authenticated call failed with status {status}");
        platform
            .toast(&http_error_message(status))
            .map_err(|e| e.to_string())?;
    }
    serde_json::from_str(body).map_err(|e| format!("invalid JSON response: {e}"))
}

/// POST `body` as JSON to `path` on the current origin.
///
/// The trusted same-origin path: no auth header is attached and the
/// response status is not inspected, so callers receive whatever JSON the
/// server returned, success and failure statuses alike. An omitted body
/// is sent as `{}`.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent or the
/// response body is not valid JSON.
pub async fn post_same_origin(path: &str, body: Option<Value>) -> Result<Value, String> {
    #[cfg(feature = "browser")]
    {
        let resp = gloo_net::http::Request::post(path)
            .json(&request_body(body))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        resp.json::<Value>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (path, body);
        Err("not available outside the browser".to_owned())
    }
}

/// POST `body` as JSON to `<API_BASE><path>` with the session bearer
/// header, when a token is stored.
///
/// A non-2xx status triggers exactly one toast with `"Error <status>"`
/// and the parsed body is still returned.
///
/// # Errors
///
/// Returns an error string when the request cannot be sent, the toast
/// markup is missing from the page, or the response body is not valid
/// JSON.
pub async fn post_api<S, P>(
    path: &str,
    body: Option<Value>,
    store: &S,
    platform: &P,
) -> Result<Value, String>
where
    S: SessionStore + ?Sized,
    P: Platform + ?Sized,
{
    #[cfg(feature = "browser")]
    {
        let url = remote_url(&crate::config::api_base(), path);
        let request = gloo_net::http::Request::post(&url);
        let request = match bearer_header(store.token().as_deref()) {
            Some((name, value)) => request.header(name, &value),
            None => request,
        };
        let resp = request
            .json(&request_body(body))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| e.to_string())?;
        finish_authenticated_response(status, &text, platform)
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = (path, body, store, platform);
        Err("not available outside the browser".to_owned())
    }
}

/// Send a chat message through the same-origin proxy.
///
/// # Errors
///
/// Returns an error string when the request fails or the reply envelope
/// does not match the expected schema.
pub async fn send_chat(request: &ChatSendRequest) -> Result<ChatReply, String> {
    #[cfg(feature = "browser")]
    {
        let payload = serde_json::to_value(request).map_err(|e| e.to_string())?;
        let value = post_same_origin(CHAT_SEND_PATH, Some(payload)).await?;
        serde_json::from_value(value).map_err(|e| format!("unexpected chat reply: {e}"))
    }
    #[cfg(not(feature = "browser"))]
    {
        let _ = request;
        Err("not available outside the browser".to_owned())
    }
}
