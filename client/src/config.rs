//! Build-time configuration for the browser bundle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so deployment
//! settings are captured with `option_env!` when the client is compiled.
//! Parsing is split out so defaults and fallbacks stay testable.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Remote API origin used when `API_BASE_URL` is unset at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Token cookie lifetime used when `ACCESS_TOKEN_EXPIRATION_TIME` is unset or invalid.
pub const DEFAULT_ACCESS_TOKEN_LIFETIME_MINUTES: u32 = 60;

/// Name of the cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// Public API documentation linked from the dashboard header.
pub const DOCS_URL: &str = "https://finoxa-api.apidog.io/";

/// How long the copy control stays in its "copied" state.
pub const COPY_FEEDBACK_MS: u32 = 1000;

/// How long a notification stays on screen before auto-dismissing.
pub const TOAST_TTL_MS: u32 = 4000;

/// Base URL of the remote API, without a trailing slash.
pub fn api_base_url() -> String {
    parse_base_url(option_env!("API_BASE_URL"))
}

/// Lifetime of the session cookie in minutes.
pub fn access_token_lifetime_minutes() -> u32 {
    parse_lifetime_minutes(option_env!("ACCESS_TOKEN_EXPIRATION_TIME"))
}

fn parse_base_url(raw: Option<&str>) -> String {
    let url = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE_URL);
    url.trim_end_matches('/').to_owned()
}

fn parse_lifetime_minutes(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|minutes| *minutes > 0)
        .unwrap_or(DEFAULT_ACCESS_TOKEN_LIFETIME_MINUTES)
}
