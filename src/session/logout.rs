//! Logout flow: forget the token, expire its cookie mirror, leave the page.

#[cfg(test)]
#[path = "logout_test.rs"]
mod logout_test;

use super::guard::LOGIN_PATH;
use super::store::{SessionStore, TOKEN_COOKIE};
use crate::platform::Platform;

/// Clear the session and navigate to the login page.
///
/// No confirmation step and no server-side call; the token is simply
/// forgotten on this client.
pub fn perform_logout<S, P>(store: &S, platform: &P)
where
    S: SessionStore + ?Sized,
    P: Platform + ?Sized,
{
    store.clear_token();
    platform.expire_cookie(TOKEN_COOKIE);
    platform.redirect(LOGIN_PATH);
}
