//! # casefront
//!
//! Browser bootstrap for the case-management portal: API base resolution,
//! a session-token page guard, JSON POST helpers (same-origin and
//! authenticated remote), toast notifications, and logout.
//!
//! ARCHITECTURE
//! ============
//! Pure decision logic (guard predicate, header builder, URL and message
//! formatting, response finishing) lives in ungated modules and is tested
//! natively. Everything that touches the DOM, storage, cookies, or the
//! network sits behind the `browser` feature and degrades to stubs
//! elsewhere, so the crate builds both as the page's WASM entry and as a
//! plain library.

#[cfg(feature = "browser")]
pub mod boot;
pub mod config;
#[cfg(feature = "browser")]
pub mod exports;
pub mod net;
pub mod platform;
pub mod session;
pub mod util;
