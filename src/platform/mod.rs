//! Page-capability seam for UI side effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Toasts, redirects, and cookie writes go through [`Platform`] so the
//! decision logic around them stays pure; tests substitute recording
//! doubles for the DOM-backed implementation.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

pub mod browser;

use thiserror::Error;

/// Toast container element the pages render.
pub const TOAST_SELECTOR: &str = "#app-toast";

/// Message element inside the toast container.
pub const TOAST_BODY_SELECTOR: &str = ".toast-body";

/// Logout control the bootstrap entry binds to.
pub const LOGOUT_BUTTON_ID: &str = "btn-logout";

/// Error returned by [`Platform`] implementations.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// No element in the page matches the given selector.
    #[error("no element matches selector {0}")]
    MissingElement(String),
    /// A required browser API is unavailable in this environment.
    #[error("browser API unavailable: {0}")]
    Unavailable(&'static str),
}

/// Page-level side effects behind a mockable seam.
pub trait Platform {
    /// Show a transient toast with `message`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::MissingElement`] when the toast markup is
    /// absent from the page.
    fn toast(&self, message: &str) -> Result<(), PlatformError>;

    /// Navigate the page to `path`.
    fn redirect(&self, path: &str);

    /// Expire the cookie `name` immediately (path `/`).
    fn expire_cookie(&self, name: &str);
}

/// Cookie header value that expires `name` immediately.
#[must_use]
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; Max-Age=0; path=/")
}
