//! `sessionStorage`-backed token store.
//!
//! Outside the browser every operation degrades to the absent-token state
//! so shared code paths stay total.

use super::store::SessionStore;
#[cfg(feature = "browser")]
use super::store::TOKEN_KEY;

/// [`SessionStore`] over the page's `sessionStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSession;

#[cfg(feature = "browser")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl SessionStore for BrowserSession {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "browser")]
        {
            session_storage()?.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "browser"))]
        {
            None
        }
    }

    fn set_token(&self, token: &str) {
        #[cfg(feature = "browser")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = token;
        }
    }

    fn clear_token(&self) {
        #[cfg(feature = "browser")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}
