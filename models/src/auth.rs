//! Login exchange payloads.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Credentials submitted to `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address or username.
    pub identifier: String,
    /// Plain-text password; only ever sent over the wire, never stored.
    pub password: String,
}

/// The signed-in identity as carried in the login response and session store.
///
/// The backend also embeds a `role` field inside the user object on some
/// endpoints; the console treats the top-level response `role` as
/// authoritative and ignores the embedded copy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Unique user identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address used as the login identifier.
    pub email: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque bearer credential presented on subsequent requests.
    pub token: String,
    /// The authenticated identity.
    pub user: SessionUser,
    /// Access tier as a raw string; the console validates it against the
    /// closed [`crate::Role`] enumeration before establishing a session.
    pub role: String,
    /// Token expiry timestamp, when the backend provides one.
    #[serde(default)]
    pub expires_at: Option<String>,
    /// Optional outcome summary.
    #[serde(default)]
    pub message: Option<String>,
}
