//! Networking modules for the portal's HTTP surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the JSON POST helpers (same-origin and authenticated
//! remote); `types` defines the wire schema of the chat proxy.

pub mod api;
pub mod types;
