//! Session store: the bearer token cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written at login/signup, removed at logout, and read only by the HTTP
//! adapter when it attaches credentials. Whether the token is still valid is
//! never decided here; `/auth/me` is the authority.
//!
//! TRADE-OFFS
//! ==========
//! Cookie access is browser-only. SSR and host tests see an empty store and
//! writes succeed as no-ops so rendering stays deterministic.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

use crate::config::TOKEN_COOKIE;

/// Expiry used to delete a cookie.
const EPOCH_UTC: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Failure to touch the browser cookie jar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no browser document available")]
    NoDocument,
    #[error("cookie write rejected: {0}")]
    CookieWrite(String),
}

/// Persist `token` with an expiry `lifetime_minutes` from now.
///
/// # Errors
///
/// Returns [`SessionError`] if the document is missing or rejects the write.
pub fn set(token: &str, lifetime_minutes: u32) -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let expires_at = expiry_millis(js_sys::Date::now(), lifetime_minutes);
        let expires = String::from(js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(expires_at)).to_utc_string());
        let value = String::from(js_sys::encode_uri_component(token));
        write(&set_cookie_string(TOKEN_COOKIE, &value, &expires))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, lifetime_minutes);
        Ok(())
    }
}

/// Delete the token cookie.
///
/// # Errors
///
/// Returns [`SessionError`] if the document is missing or rejects the write.
pub fn remove() -> Result<(), SessionError> {
    #[cfg(feature = "hydrate")]
    {
        write(&removal_cookie_string(TOKEN_COOKIE))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(())
    }
}

/// Current token, if the browser holds an unexpired one.
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let header = html_document().ok()?.cookie().ok()?;
        let raw = find_cookie(&header, TOKEN_COOKIE)?;
        // Malformed escapes come back as written.
        Some(js_sys::decode_uri_component(&raw).map_or(raw, String::from))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
fn html_document() -> Result<web_sys::HtmlDocument, SessionError> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .ok_or(SessionError::NoDocument)
}

#[cfg(feature = "hydrate")]
fn write(cookie: &str) -> Result<(), SessionError> {
    html_document()?
        .set_cookie(cookie)
        .map_err(|e| SessionError::CookieWrite(format!("{e:?}")))
}

/// Absolute expiry in epoch milliseconds.
#[cfg(any(test, feature = "hydrate"))]
fn expiry_millis(now_ms: f64, lifetime_minutes: u32) -> f64 {
    now_ms + f64::from(lifetime_minutes) * 60_000.0
}

/// `value` must already be URI-encoded.
#[cfg(any(test, feature = "hydrate"))]
fn set_cookie_string(name: &str, value: &str, expires_utc: &str) -> String {
    format!("{name}={value}; expires={expires_utc}; path=/; secure; samesite=none")
}

#[cfg(any(test, feature = "hydrate"))]
fn removal_cookie_string(name: &str) -> String {
    format!("{name}=; expires={EPOCH_UTC}; path=/; secure; samesite=none")
}

/// Find `name` in a `document.cookie` style header (`a=1; b=2`). The value
/// is returned still encoded.
#[cfg(any(test, feature = "hydrate"))]
fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
}
