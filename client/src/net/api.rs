//! HTTP client adapter for the remote Finoxa API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! token from the cookie attached as a bearer credential.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! the API is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed [`ApiError`]; callers decide whether a failure
//! becomes a notification or a silent "signed out" state. Nothing here
//! retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthResponse, LoginRequest, MutationAck, SignupRequest, User};

pub const AUTH_ME_PATH: &str = "/auth/me";
pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const USER_PATH: &str = "/user";
pub const GENERATE_API_KEY_PATH: &str = "/user/generate-apikey";
pub const DELETE_API_KEY_PATH: &str = "/user/delete-apikey";

/// Failure of a single remote call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Transport(String),
    /// The API answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for server-side rejections.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Pick the human-readable message out of an error body.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<super::types::ErrorBody>(body).unwrap_or_default();
    if let Some(message) = parsed.message.filter(|m| !m.trim().is_empty()) {
        return message;
    }
    match parsed.detail {
        Some(serde_json::Value::String(detail)) if !detail.is_empty() => detail,
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
            .map_or_else(|| status_failed_message(status), str::to_owned),
        _ => status_failed_message(status),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_failed_message(status: u16) -> String {
    format!("request failed with status {status}")
}

/// Unwrap an identity envelope, treating a missing `data` object as a failure.
#[cfg(any(test, feature = "hydrate"))]
fn require_identity(envelope: super::types::DataEnvelope<User>) -> Result<User, ApiError> {
    envelope.data.ok_or_else(|| ApiError::Decode("response has no user data".to_owned()))
}

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{ApiError, bearer, endpoint, error_message};

    pub(super) fn url(path: &str) -> String {
        endpoint(&crate::config::api_base_url(), path)
    }

    /// Attach the session token, if the browser holds one.
    pub(super) fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match crate::util::cookie::read() {
            Some(token) => builder.header("Authorization", &bearer(&token)),
            None => builder,
        }
    }

    pub(super) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        builder.send().await.map_err(|e| ApiError::Transport(e.to_string()))
    }

    pub(super) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, message: error_message(status, &body) });
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Ask the API who the bearer of the current token is (`GET /auth/me`).
///
/// # Errors
///
/// Returns [`ApiError`] on transport failure, non-2xx status (including 401
/// for a missing/expired token), or a body without user data.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let req = transport::authorized(Request::get(&transport::url(AUTH_ME_PATH)));
        let resp = transport::send(req).await?;
        require_identity(transport::read_json(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Load the full profile of the signed-in user (`GET /user`).
///
/// # Errors
///
/// Same failure modes as [`fetch_current_user`].
pub async fn fetch_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let req = transport::authorized(Request::get(&transport::url(USER_PATH)));
        let resp = transport::send(req).await?;
        require_identity(transport::read_json(resp).await?)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Exchange credentials for an access token (`POST /auth/login`).
///
/// # Errors
///
/// Returns [`ApiError::Status`] carrying the server message (for example
/// `"Invalid credentials"`) when the API rejects the login.
pub async fn login(body: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials(LOGIN_PATH, body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Unavailable)
    }
}

/// Create an account and receive an access token (`POST /auth/signup`).
///
/// # Errors
///
/// Returns [`ApiError::Status`] when the API rejects the signup, for example
/// because the email is already registered.
pub async fn signup(body: &SignupRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_credentials(SIGNUP_PATH, body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
async fn post_credentials<B: serde::Serialize>(path: &str, body: &B) -> Result<AuthResponse, ApiError> {
    use gloo_net::http::Request;
    let req = transport::authorized(Request::post(&transport::url(path)))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let resp = req.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    transport::read_json(resp).await
}

/// Issue a new API key for the signed-in user, replacing any existing one
/// (`PUT /user/generate-apikey`).
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or is rejected.
pub async fn generate_api_key() -> Result<MutationAck, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let req = transport::authorized(Request::put(&transport::url(GENERATE_API_KEY_PATH)));
        let resp = transport::send(req).await?;
        transport::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Revoke the signed-in user's API key (`DELETE /user/delete-apikey`).
///
/// # Errors
///
/// Returns [`ApiError`] if the request fails or is rejected.
pub async fn delete_api_key() -> Result<MutationAck, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;
        let req = transport::authorized(Request::delete(&transport::url(DELETE_API_KEY_PATH)));
        let resp = transport::send(req).await?;
        transport::read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
