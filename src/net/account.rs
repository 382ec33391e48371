//! Self-service endpoints for the signed-in account.

#![allow(clippy::unused_async)]

use models::account::{AccountDetails, UpdateAccountRequest, UpdatePasswordRequest};
use models::api::{ApiError, ApiResponse};
use serde_json::Value;

use crate::state::auth::AuthStore;

/// Details of the signed-in account via `GET /api/account`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_account(auth: &AuthStore) -> Result<ApiResponse<AccountDetails>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, "/account", &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(super::api::server_unavailable())
    }
}

/// Update account details via `PUT /api/account`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn update_account(
    auth: &AuthStore,
    request: &UpdateAccountRequest,
) -> Result<ApiResponse<AccountDetails>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::put(auth, "/account", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, request);
        Err(super::api::server_unavailable())
    }
}

/// Change the account password via `PUT /api/account/password`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn update_password(
    auth: &AuthStore,
    request: &UpdatePasswordRequest,
) -> Result<ApiResponse<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::put(auth, "/account/password", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, request);
        Err(super::api::server_unavailable())
    }
}
