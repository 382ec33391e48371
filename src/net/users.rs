//! Admin user-moderation endpoints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use models::api::{ApiError, ApiResponse};
use models::user::{User, UserFilters, UserStats, UsersResponse};
use serde_json::Value;

use crate::state::auth::AuthStore;

#[cfg(any(test, feature = "hydrate"))]
fn user_path(user_id: i64) -> String {
    format!("/admin/users/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_action_path(user_id: i64, action: &str) -> String {
    format!("/admin/users/{user_id}/{action}")
}

/// List users with moderation filters via `GET /api/admin/users`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_users(
    auth: &AuthStore,
    filters: &UserFilters,
) -> Result<ApiResponse<UsersResponse>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, "/admin/users", &filters.query_pairs()).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, filters);
        Err(super::api::server_unavailable())
    }
}

/// Aggregate user counters via `GET /api/admin/users/stats`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_user_stats(auth: &AuthStore) -> Result<ApiResponse<UserStats>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, "/admin/users/stats", &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(super::api::server_unavailable())
    }
}

/// Single user detail via `GET /api/admin/users/{id}`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_user(auth: &AuthStore, user_id: i64) -> Result<ApiResponse<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, &user_path(user_id), &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, user_id);
        Err(super::api::server_unavailable())
    }
}

/// Suspend a user with a moderation reason.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn suspend_user(
    auth: &AuthStore,
    user_id: i64,
    reason: &str,
) -> Result<ApiResponse<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "reason": reason });
        super::api::post(auth, &user_action_path(user_id, "suspend"), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, user_id, reason);
        Err(super::api::server_unavailable())
    }
}

/// Lift a user's suspension.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn unsuspend_user(auth: &AuthStore, user_id: i64) -> Result<ApiResponse<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({});
        super::api::post(auth, &user_action_path(user_id, "unsuspend"), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, user_id);
        Err(super::api::server_unavailable())
    }
}
