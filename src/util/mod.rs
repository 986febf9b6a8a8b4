//! Display-formatting helpers shared by the portal pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure string formatting only; nothing here touches the browser.

pub mod dates;
pub mod numfmt;
