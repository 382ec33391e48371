//! Analytics payloads for the dashboard and role-specific summaries.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use serde::{Deserialize, Serialize};

/// Operational health block inside the admin analytics snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemHealth {
    pub database_status: String,
    pub storage_usage_percentage: f64,
    pub average_response_time_ms: f64,
    pub uptime_percentage: f64,
}

/// Platform-wide snapshot shown on the admin dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminAnalytics {
    pub total_revenue: f64,
    pub revenue_today: f64,
    pub revenue_this_month: f64,
    pub total_tokens_in_circulation: u64,
    pub total_users: u64,
    pub active_users_today: u64,
    pub active_users_this_week: u64,
    pub new_users_today: u64,
    pub new_users_this_week: u64,
    pub total_profiles: u64,
    pub active_profiles: u64,
    pub total_writers: u64,
    pub active_writers_today: u64,
    pub total_messages: u64,
    pub messages_today: u64,
    pub total_chats: u64,
    pub active_chats: u64,
    pub unclaimed_chats: u64,
    pub total_reports: u64,
    pub pending_reports: u64,
    pub flagged_messages: u64,
    pub system_health: SystemHealth,
}

/// Wrapper the admin analytics endpoint uses instead of the standard
/// envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminAnalyticsResponse {
    pub analytics: AdminAnalytics,
}

/// Most recent token purchase on a user account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LastPurchase {
    pub date: String,
    pub amount: String,
    pub tokens: i64,
}

/// Spending summary for a regular user account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserAnalytics {
    pub total_spending: String,
    pub total_tokens_purchased: i64,
    pub total_tokens_spent: i64,
    pub current_balance: i64,
    pub messages_sent: i64,
    pub active_chats: i64,
    pub favorite_profiles: i64,
    pub account_created_days_ago: i64,
    #[serde(default)]
    pub last_purchase: Option<LastPurchase>,
}

/// Earnings summary for a writer account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WriterAnalytics {
    pub total_earnings: String,
    pub total_tokens_earned: i64,
    pub messages_sent: i64,
    pub active_chats: i64,
    pub claimed_chats: i64,
    pub available_chats: i64,
    pub assigned_profiles: i64,
    pub average_response_time_minutes: f64,
    pub earnings_this_month: String,
    pub messages_this_month: i64,
}

/// Labeled series for chart endpoints; only the series matching the chart
/// kind is populated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    #[serde(default)]
    pub revenue: Option<Vec<f64>>,
    #[serde(default)]
    pub spending: Option<Vec<f64>>,
    #[serde(default)]
    pub tokens_used: Option<Vec<f64>>,
    #[serde(default)]
    pub earnings: Option<Vec<f64>>,
    #[serde(default)]
    pub messages: Option<Vec<f64>>,
}

/// Aggregation window for chart endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartPeriod {
    Daily,
    Weekly,
    #[default]
    Monthly,
}

impl ChartPeriod {
    /// Parse a period name; unknown values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "daily" => Some(Self::Daily),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}
