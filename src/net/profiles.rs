//! Content-profile management endpoints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "profiles_test.rs"]
mod profiles_test;

use models::api::{ApiError, ApiResponse};
use models::profile::{
    AssignWritersRequest, CreateProfileRequest, OnlineStatusRequest, Profile, ProfileStatus,
    UpdateProfileRequest,
};
use serde_json::Value;

use crate::state::auth::AuthStore;

#[cfg(any(test, feature = "hydrate"))]
fn profile_path(profile_id: i64) -> String {
    format!("/profiles/{profile_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn profile_action_path(profile_id: i64, action: &str) -> String {
    format!("/profiles/{profile_id}/{action}")
}

#[cfg(any(test, feature = "hydrate"))]
fn list_query(
    page: u32,
    per_page: u32,
    status: Option<ProfileStatus>,
    search: Option<&str>,
) -> Vec<(&'static str, String)> {
    let mut pairs = vec![("per_page", per_page.to_string()), ("page", page.to_string())];
    if let Some(status) = status {
        pairs.push(("status", status.as_str().to_owned()));
    }
    if let Some(search) = search {
        if !search.is_empty() {
            pairs.push(("search", search.to_owned()));
        }
    }
    pairs
}

/// List profiles via `GET /api/profiles`. The backend returns a direct
/// array rather than the standard envelope.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_profiles(
    auth: &AuthStore,
    page: u32,
    per_page: u32,
    status: Option<ProfileStatus>,
    search: Option<&str>,
) -> Result<Vec<Profile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, "/profiles", &list_query(page, per_page, status, search)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, page, per_page, status, search);
        Err(super::api::server_unavailable())
    }
}

/// Featured profiles via `GET /api/profiles/featured`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_featured_profiles(auth: &AuthStore) -> Result<Vec<Profile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, "/profiles/featured", &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(super::api::server_unavailable())
    }
}

/// Create a profile via `POST /api/profiles`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn create_profile(
    auth: &AuthStore,
    request: &CreateProfileRequest,
) -> Result<ApiResponse<Profile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::post(auth, "/profiles", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, request);
        Err(super::api::server_unavailable())
    }
}

/// Update profile fields via `PUT /api/profiles/{id}`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn update_profile(
    auth: &AuthStore,
    profile_id: i64,
    request: &UpdateProfileRequest,
) -> Result<ApiResponse<Profile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::put(auth, &profile_path(profile_id), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, profile_id, request);
        Err(super::api::server_unavailable())
    }
}

/// Delete a profile via `DELETE /api/profiles/{id}`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn delete_profile(auth: &AuthStore, profile_id: i64) -> Result<ApiResponse<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::delete(auth, &profile_path(profile_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, profile_id);
        Err(super::api::server_unavailable())
    }
}

/// Toggle the presented online status via
/// `POST /api/profiles/{id}/online-status`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn set_online_status(
    auth: &AuthStore,
    profile_id: i64,
    request: &OnlineStatusRequest,
) -> Result<ApiResponse<Profile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::post(auth, &profile_action_path(profile_id, "online-status"), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, profile_id, request);
        Err(super::api::server_unavailable())
    }
}

/// Assign writers to a profile via `POST /api/profiles/{id}/assign-writers`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn assign_writers(
    auth: &AuthStore,
    profile_id: i64,
    request: &AssignWritersRequest,
) -> Result<ApiResponse<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::post(auth, &profile_action_path(profile_id, "assign-writers"), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, profile_id, request);
        Err(super::api::server_unavailable())
    }
}
