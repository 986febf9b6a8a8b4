//! DOM-backed [`Platform`] implementation.
//!
//! The toast goes through the page's global `bootstrap.Toast` widget, so
//! styling and auto-dismiss stay with the page's UI library.

use super::{Platform, PlatformError};
#[cfg(feature = "browser")]
use super::{TOAST_BODY_SELECTOR, TOAST_SELECTOR, expired_cookie};

#[cfg(feature = "browser")]
use wasm_bindgen::{JsCast, JsValue};

/// [`Platform`] over the real page DOM.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPlatform;

#[cfg(feature = "browser")]
fn document() -> Result<web_sys::Document, PlatformError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(PlatformError::Unavailable("document"))
}

#[cfg(feature = "browser")]
fn select(parent: &web_sys::Element, selector: &str) -> Result<web_sys::Element, PlatformError> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| PlatformError::MissingElement(selector.to_owned()))
}

/// Construct `new bootstrap.Toast(container)` and call `show()` on it.
#[cfg(feature = "browser")]
fn show_bootstrap_toast(container: &web_sys::Element) -> Result<(), PlatformError> {
    let window = web_sys::window().ok_or(PlatformError::Unavailable("window"))?;
    let namespace = js_sys::Reflect::get(&window, &JsValue::from_str("bootstrap"))
        .ok()
        .filter(|value| !value.is_undefined())
        .ok_or(PlatformError::Unavailable("bootstrap"))?;
    let constructor: js_sys::Function = js_sys::Reflect::get(&namespace, &JsValue::from_str("Toast"))
        .ok()
        .and_then(|value| value.dyn_into().ok())
        .ok_or(PlatformError::Unavailable("bootstrap.Toast"))?;
    let widget = js_sys::Reflect::construct(&constructor, &js_sys::Array::of1(container))
        .map_err(|_| PlatformError::Unavailable("bootstrap.Toast"))?;
    let show: js_sys::Function = js_sys::Reflect::get(&widget, &JsValue::from_str("show"))
        .ok()
        .and_then(|value| value.dyn_into().ok())
        .ok_or(PlatformError::Unavailable("bootstrap.Toast.show"))?;
    let _ = show.call0(&widget);
    Ok(())
}

impl Platform for BrowserPlatform {
    fn toast(&self, message: &str) -> Result<(), PlatformError> {
        #[cfg(feature = "browser")]
        {
            let document = document()?;
            let container = document
                .query_selector(TOAST_SELECTOR)
                .ok()
                .flatten()
                .ok_or_else(|| PlatformError::MissingElement(TOAST_SELECTOR.to_owned()))?;
            let body = select(&container, TOAST_BODY_SELECTOR)?;
            body.set_text_content(Some(message));
            show_bootstrap_toast(&container)
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = message;
            Err(PlatformError::Unavailable("toast"))
        }
    }

    fn redirect(&self, path: &str) {
        #[cfg(feature = "browser")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = path;
        }
    }

    fn expire_cookie(&self, name: &str) {
        #[cfg(feature = "browser")]
        {
            let html_document = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok());
            if let Some(doc) = html_document {
                let _ = doc.set_cookie(&expired_cookie(name));
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = name;
        }
    }
}
