//! API base address resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages may embed `<meta name="api-base" content="...">` to point the
//! client at a different backend; otherwise calls go to the production
//! origin. The address is resolved once per page and immutable afterwards.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[cfg(feature = "browser")]
use std::cell::OnceCell;

/// Backend origin used when the page embeds no `api-base` meta tag.
pub const DEFAULT_API_BASE: &str =
    "https://inventa-selva-asistente-production.up.railway.app";

#[cfg(feature = "browser")]
const API_BASE_META_SELECTOR: &str = "meta[name=\"api-base\"]";

/// Normalize an optional embedded meta value into the API base address.
///
/// Blank values fall back to [`DEFAULT_API_BASE`]; trailing slashes are
/// stripped so path concatenation stays predictable.
#[must_use]
pub fn resolve_api_base(meta_content: Option<&str>) -> String {
    match meta_content.map(str::trim).filter(|content| !content.is_empty()) {
        Some(content) => content.trim_end_matches('/').to_owned(),
        None => DEFAULT_API_BASE.to_owned(),
    }
}

#[cfg(feature = "browser")]
thread_local! {
    static API_BASE: OnceCell<String> = const { OnceCell::new() };
}

/// API base address for this page, resolved from the meta tag on first use.
#[cfg(feature = "browser")]
#[must_use]
pub fn api_base() -> String {
    API_BASE.with(|cell| {
        cell.get_or_init(|| resolve_api_base(embedded_api_base().as_deref()))
            .clone()
    })
}

#[cfg(feature = "browser")]
fn embedded_api_base() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(API_BASE_META_SELECTOR).ok()??;
    meta.get_attribute("content")
}
