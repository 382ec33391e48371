//! Login exchange and shared request plumbing.
//!
//! ERROR HANDLING
//! ==============
//! Failures propagate unchanged as `ApiError`; presentation code decides
//! what to show. The one exception is the persistence warning after a
//! successful login, raised here because callers cannot observe it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use models::{ApiError, LoginRequest, LoginResponse, Role};

use crate::state::auth::AuthStore;
use crate::state::notify::Notifier;

/// Base path of the platform REST API.
pub const BASE_URL: &str = "/api";

#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn endpoint(path: &str) -> String {
    format!("{BASE_URL}{path}")
}

/// `Authorization` header value from the current auth snapshot. An absent
/// token yields a bare `Bearer` prefix, which the backend rejects as
/// unauthenticated.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn bearer(auth: &AuthStore) -> String {
    format!("Bearer {}", auth.snapshot().token.unwrap_or_default())
}

#[cfg(not(feature = "hydrate"))]
pub(crate) fn server_unavailable() -> ApiError {
    ApiError::Transport("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
async fn decode_response<T>(resp: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !resp.ok() {
        let status = resp.status();
        let raw = resp.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &raw));
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
pub(crate) async fn get<T>(
    auth: &AuthStore,
    path: &str,
    query: &[(&'static str, String)],
) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let mut builder = gloo_net::http::Request::get(&endpoint(path)).header("Authorization", &bearer(auth));
    if !query.is_empty() {
        builder = builder.query(query.iter().map(|(key, value)| (*key, value.as_str())));
    }
    let resp = builder
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_response(resp).await
}

#[cfg(feature = "hydrate")]
pub(crate) async fn post<T, B>(auth: &AuthStore, path: &str, body: &B) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
    B: serde::Serialize,
{
    let resp = gloo_net::http::Request::post(&endpoint(path))
        .header("Authorization", &bearer(auth))
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_response(resp).await
}

#[cfg(feature = "hydrate")]
pub(crate) async fn put<T, B>(auth: &AuthStore, path: &str, body: &B) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
    B: serde::Serialize,
{
    let resp = gloo_net::http::Request::put(&endpoint(path))
        .header("Authorization", &bearer(auth))
        .json(body)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_response(resp).await
}

#[cfg(feature = "hydrate")]
pub(crate) async fn delete<T>(auth: &AuthStore, path: &str) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::delete(&endpoint(path))
        .header("Authorization", &bearer(auth))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_response(resp).await
}

/// Exchange credentials for a session via `POST /api/auth/login`.
///
/// On success the auth container is updated before this returns, and the
/// raw payload is handed back so the caller can make its own redirect
/// decision. A payload whose role is outside the closed enumeration is a
/// rejected login: no state is applied.
///
/// # Errors
///
/// Propagates transport, status, and malformed-payload failures unchanged.
pub async fn login(
    auth: &AuthStore,
    notify: Notifier,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/auth/login"))
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let payload: LoginResponse = decode_response(resp).await?;
        let Some(role) = Role::parse(&payload.role) else {
            return Err(ApiError::Decode(format!(
                "login rejected: unrecognized role \"{}\"",
                payload.role
            )));
        };
        let persisted = auth.apply_login(&payload.token, payload.user.clone(), role);
        if !persisted {
            notify.warn("Signed in, but the session will not survive a reload");
        }
        Ok(payload)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, notify, request);
        Err(server_unavailable())
    }
}
