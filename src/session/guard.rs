//! Navigation guard for token-protected pages.
//!
//! DESIGN
//! ======
//! The guard is a pure predicate; acting on its outcome (redirecting,
//! rendering a banner, nothing at all) is the integrator's call. The
//! bootstrap entry currently only logs it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Login page path, exempt from the guard and targeted by logout.
pub const LOGIN_PATH: &str = "/auth/login";

/// Paths reachable without a session token.
pub const PUBLIC_PATHS: &[&str] = &[LOGIN_PATH];

/// Whether `path` is reachable without a session token.
#[must_use]
pub fn is_public_path(path: &str) -> bool {
    PUBLIC_PATHS.contains(&path)
}

/// Whether an unauthenticated visit to `path` should bounce to login.
///
/// Never true for public paths, so the login page cannot redirect to
/// itself.
#[must_use]
pub fn should_redirect_to_login(path: &str, has_token: bool) -> bool {
    !has_token && !is_public_path(path)
}
