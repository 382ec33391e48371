//! Analytics endpoints for the dashboard and role summaries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use models::analytics::{
    AdminAnalyticsResponse, ChartData, ChartPeriod, UserAnalytics, WriterAnalytics,
};
use models::api::{ApiError, ApiResponse};

use crate::state::auth::AuthStore;

#[cfg(any(test, feature = "hydrate"))]
fn period_query(period: ChartPeriod) -> Vec<(&'static str, String)> {
    vec![("period", period.as_str().to_owned())]
}

/// Platform-wide snapshot via `GET /api/analytics/admin`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_admin_analytics(auth: &AuthStore) -> Result<AdminAnalyticsResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, "/analytics/admin", &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(super::api::server_unavailable())
    }
}

/// Revenue series via `GET /api/analytics/admin/revenue-chart`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_admin_revenue_chart(
    auth: &AuthStore,
    period: ChartPeriod,
) -> Result<ApiResponse<ChartData>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, "/analytics/admin/revenue-chart", &period_query(period)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, period);
        Err(super::api::server_unavailable())
    }
}

/// Spending summary for the signed-in user account.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_user_analytics(auth: &AuthStore) -> Result<ApiResponse<UserAnalytics>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, "/analytics/user", &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(super::api::server_unavailable())
    }
}

/// Earnings summary for the signed-in writer account.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_writer_analytics(
    auth: &AuthStore,
) -> Result<ApiResponse<WriterAnalytics>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, "/analytics/writer", &[]).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        Err(super::api::server_unavailable())
    }
}

/// Earnings series via `GET /api/analytics/writer/earnings-chart`.
///
/// # Errors
///
/// Propagates any transport or backend failure unchanged.
pub async fn fetch_writer_earnings_chart(
    auth: &AuthStore,
    period: ChartPeriod,
) -> Result<ApiResponse<ChartData>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::api::get(auth, "/analytics/writer/earnings-chart", &period_query(period)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, period);
        Err(super::api::server_unavailable())
    }
}
