use std::cell::RefCell;

use serde_json::json;

use super::*;
use crate::platform::{Platform, PlatformError, TOAST_SELECTOR};

#[derive(Debug, Default)]
struct RecordingPlatform {
    toasts: RefCell<Vec<String>>,
}

impl Platform for RecordingPlatform {
    fn toast(&self, message: &str) -> Result<(), PlatformError> {
        self.toasts.borrow_mut().push(message.to_owned());
        Ok(())
    }

    fn redirect(&self, _path: &str) {}

    fn expire_cookie(&self, _name: &str) {}
}

/// Platform whose toast markup is missing from the page.
#[derive(Debug, Default)]
struct ToastlessPlatform;

impl Platform for ToastlessPlatform {
    fn toast(&self, _message: &str) -> Result<(), PlatformError> {
        Err(PlatformError::MissingElement(TOAST_SELECTOR.to_owned()))
    }

    fn redirect(&self, _path: &str) {}

    fn expire_cookie(&self, _name: &str) {}
}

#[test]
fn request_body_defaults_to_empty_object() {
    assert_eq!(serde_json::to_string(&request_body(None)).unwrap(), "{}");
}

#[test]
fn request_body_passes_payload_through() {
    let payload = json!({"text": "hola", "n": 3, "nested": {"k": [1, 2]}});
    assert_eq!(request_body(Some(payload.clone())), payload);
}

#[test]
fn remote_url_concatenates_base_and_path() {
    assert_eq!(
        remote_url("https://api.example.com", "/api/cases"),
        "https://api.example.com/api/cases"
    );
}

#[test]
fn http_error_message_contains_numeric_status() {
    assert_eq!(http_error_message(404), "Error 404");
    assert_eq!(http_error_message(500), "Error 500");
}

#[test]
fn statuses_outside_2xx_are_failures() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(is_success(299));
    assert!(!is_success(199));
    assert!(!is_success(300));
    assert!(!is_success(404));
}

#[test]
fn failed_response_toasts_once_and_still_returns_body() {
    let platform = RecordingPlatform::default();
    let body = json!({"ok": false, "error": "missing case"});

    let result = finish_authenticated_response(404, &body.to_string(), &platform).unwrap();

    assert_eq!(result, body);
    assert_eq!(platform.toasts.borrow().as_slice(), ["Error 404"]);
}

#[test]
fn successful_response_does_not_toast() {
    let platform = RecordingPlatform::default();

    let result = finish_authenticated_response(200, "{\"ok\":true}", &platform).unwrap();

    assert_eq!(result, json!({"ok": true}));
    assert!(platform.toasts.borrow().is_empty());
}

#[test]
fn failed_response_toasts_before_parse_failure() {
    let platform = RecordingPlatform::default();

    let err = finish_authenticated_response(500, "oops", &platform).unwrap_err();

    assert!(err.contains("invalid JSON"));
    assert_eq!(platform.toasts.borrow().as_slice(), ["Error 500"]);
}

#[test]
fn missing_toast_markup_fails_the_call() {
    let err = finish_authenticated_response(503, "{}", &ToastlessPlatform).unwrap_err();
    assert!(err.contains("#app-toast"));
}

#[test]
fn invalid_json_body_is_an_error_even_on_success_status() {
    let platform = RecordingPlatform::default();
    let err = finish_authenticated_response(200, "<html>", &platform).unwrap_err();
    assert!(err.contains("invalid JSON"));
}
