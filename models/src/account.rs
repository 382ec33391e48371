//! Self-service records for the signed-in account.

use serde::{Deserialize, Serialize};

/// Full detail view of the signed-in account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountDetails {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub phone_verified_at: Option<String>,
    pub bio: String,
    pub interests: Vec<String>,
    pub profile_photo: String,
    pub age: u32,
    pub date_of_birth: String,
    pub country: String,
    pub city: String,
    pub verification_status: String,
    pub verified_at: Option<String>,
    pub is_active: bool,
    pub is_suspended: bool,
    pub last_seen_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Partial update body for the account details form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Body for the password-change form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}
