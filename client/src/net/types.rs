//! Wire DTOs for the remote Finoxa API.
//!
//! DESIGN
//! ======
//! Response envelopes mirror the API's `{status, data, message}` shape. Fields
//! the console never reads are ignored so server-side additions don't break
//! decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An account as returned under `data` by `/auth/me`, `/auth/login`,
/// `/auth/signup`, and `/user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Account identifier.
    #[serde(default)]
    pub id: String,
    /// Display name entered at signup.
    #[serde(default)]
    pub name: String,
    /// Login email.
    #[serde(default)]
    pub email: String,
    /// Current API key. The API reports a deleted key as `""`.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl User {
    /// The API key, if one has been generated and not deleted.
    pub fn active_api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

/// `{ data: ... }` envelope used by the identity endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: Option<T>,
}

/// Successful `/auth/login` or `/auth/signup` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub data: User,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Acknowledgement returned by the API-key mutations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MutationAck {
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body shapes: `{message}` from the API handlers, `{detail}` from
/// request validation.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}
