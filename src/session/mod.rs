//! Session-token lifecycle: storage seam, page guard, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is issued elsewhere by the login flow. These modules own only
//! the storage slot and the decisions built on it, so storage backends can
//! be swapped without touching callers.

pub mod browser;
pub mod guard;
pub mod logout;
pub mod store;
