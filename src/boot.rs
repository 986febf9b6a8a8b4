//! Page-load bootstrap: logging, guard evaluation, logout wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once as the page's WASM entry. Everything here is reactive to the
//! initial load and to the logout click; there is no background work.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::platform::LOGOUT_BUTTON_ID;
use crate::platform::browser::BrowserPlatform;
use crate::session::browser::BrowserSession;
use crate::session::guard;
use crate::session::logout::perform_logout;
use crate::session::store::SessionStore;

/// WASM entry point, invoked once per page load.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    // Resolve the API base while the document's meta tags are fresh.
    let _ = crate::config::api_base();

    evaluate_guard();
    install_logout_handler();
}

/// Evaluate the navigation guard for the current path.
///
/// Acting on the outcome is left to the integrator; here it is only
/// logged. Public paths never produce the unauthenticated outcome.
fn evaluate_guard() {
    let Some(path) = current_path() else { return };
    let has_token = BrowserSession.token().is_some();
    if guard::should_redirect_to_login(&path, has_token) {
        log::debug!("unauthenticated visit to protected path {path}");
    }
}

fn current_path() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// Bind the logout flow to the logout control, when the page renders one.
fn install_logout_handler() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(button) = document.get_element_by_id(LOGOUT_BUTTON_ID) else {
        return;
    };

    let on_click = Closure::wrap(Box::new(move |_: web_sys::Event| {
        log::info!("logging out");
        perform_logout(&BrowserSession, &BrowserPlatform);
    }) as Box<dyn FnMut(_)>);
    let _ = button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    // The handler lives for the rest of the page.
    on_click.forget();
}
