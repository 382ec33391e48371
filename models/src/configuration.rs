//! System-configuration records (platform-wide key/value settings).

#[cfg(test)]
#[path = "configuration_test.rs"]
mod configuration_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Declared type of a configuration value; the backend casts on read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigValueType {
    String,
    Integer,
    Decimal,
    Boolean,
    Json,
}

impl ConfigValueType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::Json => "json",
        }
    }
}

/// A stored configuration record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SystemConfiguration {
    pub id: i64,
    pub key: String,
    /// Raw value as stored; interpretation follows `value_type`.
    pub value: String,
    #[serde(rename = "type")]
    pub value_type: ConfigValueType,
    pub description: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Body for creating or updating a configuration record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRequest {
    pub key: String,
    pub value: String,
    #[serde(rename = "type")]
    pub value_type: ConfigValueType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response for a single-key lookup; the backend casts `value` to the
/// declared type before returning it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SingleConfigResponse {
    pub message: String,
    pub key: String,
    pub value: serde_json::Value,
}

/// Cache position reported by the configuration stats endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStatus {
    Active,
    Cleared,
}

/// Aggregate stats for the configurations screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationStats {
    pub total_configurations: u64,
    pub last_updated: String,
    pub cache_status: CacheStatus,
    /// Record count per category label.
    pub categories: HashMap<String, u64>,
}
