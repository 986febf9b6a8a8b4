//! Page-script surface: the POST helpers and toast under the names the
//! portal's inline scripts call.
//!
//! DESIGN
//! ======
//! Payloads cross the boundary as `JsValue` and are bridged through
//! `JSON.stringify`/`JSON.parse`, so page scripts keep passing plain
//! object literals.

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::net::api;
use crate::platform::Platform;
use crate::platform::browser::BrowserPlatform;
use crate::session::browser::BrowserSession;

/// POST `body` to a same-origin `path`; resolves with the parsed JSON
/// body. An omitted `body` is sent as `{}`.
///
/// # Errors
///
/// Rejects when the request cannot be sent or the response is not JSON.
#[wasm_bindgen(js_name = appPost)]
pub async fn app_post(path: String, body: JsValue) -> Result<JsValue, JsValue> {
    let body = js_to_json(&body)?;
    let value = api::post_same_origin(&path, body)
        .await
        .map_err(|e| JsValue::from_str(&e))?;
    json_to_js(&value)
}

/// POST `body` to `<API_BASE><path>` with the session bearer header.
/// Non-2xx statuses toast `"Error <status>"` and still resolve with the
/// parsed body.
///
/// # Errors
///
/// Rejects when the request cannot be sent, the toast markup is missing
/// from the page, or the response is not JSON.
#[wasm_bindgen(js_name = appPostRaw)]
pub async fn app_post_raw(path: String, body: JsValue) -> Result<JsValue, JsValue> {
    let body = js_to_json(&body)?;
    let value = api::post_api(&path, body, &BrowserSession, &BrowserPlatform)
        .await
        .map_err(|e| JsValue::from_str(&e))?;
    json_to_js(&value)
}

/// Show a transient toast with `message`.
///
/// # Errors
///
/// Rejects when the toast markup is missing from the page.
#[wasm_bindgen]
pub fn toast(message: String) -> Result<(), JsValue> {
    BrowserPlatform
        .toast(&message)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn js_to_json(value: &JsValue) -> Result<Option<serde_json::Value>, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let raw = js_sys::JSON::stringify(value).map(String::from)?;
    let parsed = serde_json::from_str(&raw)
        .map_err(|e| JsValue::from_str(&format!("invalid JSON payload: {e}")))?;
    Ok(Some(parsed))
}

fn json_to_js(value: &serde_json::Value) -> Result<JsValue, JsValue> {
    let raw =
        serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    js_sys::JSON::parse(&raw)
}
