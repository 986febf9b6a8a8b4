use super::*;

#[test]
fn expired_cookie_sets_zero_max_age_on_root_path() {
    assert_eq!(expired_cookie("jwt"), "jwt=; Max-Age=0; path=/");
}

#[test]
fn expired_cookie_uses_the_given_name() {
    assert_eq!(expired_cookie("theme"), "theme=; Max-Age=0; path=/");
}

#[test]
fn missing_element_error_names_the_selector() {
    let err = PlatformError::MissingElement(TOAST_SELECTOR.to_owned());
    assert_eq!(err.to_string(), "no element matches selector #app-toast");
}

#[test]
fn unavailable_error_names_the_api() {
    let err = PlatformError::Unavailable("document");
    assert_eq!(err.to_string(), "browser API unavailable: document");
}

#[test]
fn dom_hooks_match_the_page_markup_contract() {
    assert_eq!(TOAST_SELECTOR, "#app-toast");
    assert_eq!(TOAST_BODY_SELECTOR, ".toast-body");
    assert_eq!(LOGOUT_BUTTON_ID, "btn-logout");
}
