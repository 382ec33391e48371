//! System-configuration endpoints.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "configurations_test.rs"]
mod configurations_test;

use models::api::{ApiError, ApiResponse};
use models::configuration::{
    ConfigurationRequest, ConfigurationStats, SingleConfigResponse, SystemConfiguration,
};
use serde_json::Value;

use crate::state::auth::AuthStore;

#[cfg(any(test, feature = "hydrate"))]
fn config_key_path(key: &str) -> String {
    format!("/system-configurations/{key}")
}

#[cfg(any(test, feature = "hydrate"))]
fn config_id_path(config_id: i64) -> String {
    format!("/system-configurations/{config_id}")
}

/// All configuration records via `GET /api/system-configurations`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_configurations(
    auth: &AuthStore,
) -> Result<ApiResponse<Vec<SystemConfiguration>>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, "/system-configurations", &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(super::api::server_unavailable())
    }
}

/// One configuration value by key, cast by the backend to its declared type.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_configuration(
    auth: &AuthStore,
    key: &str,
) -> Result<SingleConfigResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, &config_key_path(key), &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, key);
        Err(super::api::server_unavailable())
    }
}

/// Create or upsert a configuration via `POST /api/system-configurations`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn save_configuration(
    auth: &AuthStore,
    request: &ConfigurationRequest,
) -> Result<ApiResponse<SystemConfiguration>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::post(auth, "/system-configurations", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, request);
        Err(super::api::server_unavailable())
    }
}

/// Update an existing configuration via `PUT /api/system-configurations/{id}`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn update_configuration(
    auth: &AuthStore,
    config_id: i64,
    request: &ConfigurationRequest,
) -> Result<ApiResponse<SystemConfiguration>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::put(auth, &config_id_path(config_id), request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, config_id, request);
        Err(super::api::server_unavailable())
    }
}

/// Delete a configuration by key.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn delete_configuration(auth: &AuthStore, key: &str) -> Result<ApiResponse<Value>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::delete(auth, &config_key_path(key)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, key);
        Err(super::api::server_unavailable())
    }
}

/// Aggregate stats via `GET /api/system-configurations/stats`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_configuration_stats(
    auth: &AuthStore,
) -> Result<ApiResponse<ConfigurationStats>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, "/system-configurations/stats", &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(super::api::server_unavailable())
    }
}
