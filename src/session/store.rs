//! Session-token storage seam and bearer header builder.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;

/// Session-storage key holding the portal token.
pub const TOKEN_KEY: &str = "jwt";

/// Cookie mirroring the session token; expired on logout.
pub const TOKEN_COOKIE: &str = "jwt";

/// Read/write/clear surface over the session-token slot.
///
/// Implementations do not issue or validate tokens; an absent token is the
/// ordinary unauthenticated state, never an error.
pub trait SessionStore {
    /// Current token, if one is stored.
    fn token(&self) -> Option<String>;

    /// Store `token`, replacing any previous value.
    fn set_token(&self, token: &str);

    /// Remove the stored token.
    fn clear_token(&self);
}

/// Build the bearer auth header for `token`.
///
/// `None` yields no header. Any stored string, including the empty string,
/// yields exactly one `Authorization` entry.
#[must_use]
pub fn bearer_header(token: Option<&str>) -> Option<(&'static str, String)> {
    token.map(|t| ("Authorization", format!("Bearer {t}")))
}

/// In-memory [`SessionStore`] for tests and non-browser hosts.
///
/// `RefCell` suffices; the browser environment this mirrors is
/// single-threaded.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RefCell<Option<String>>,
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear_token(&self) {
        *self.token.borrow_mut() = None;
    }
}
