//! Platform-user records for the moderation screens.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Identity-verification workflow position for a platform user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }
}

/// A platform user as returned by the moderation endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub email_verified_at: Option<String>,
    pub phone: String,
    pub phone_verified_at: Option<String>,
    pub bio: String,
    pub interests: Vec<String>,
    pub profile_photo: String,
    pub last_seen_at: Option<String>,
    pub verification_status: VerificationStatus,
    pub verification_id_photo: Option<String>,
    pub verification_selfie: Option<String>,
    pub verified_at: Option<String>,
    pub verification_notes: Option<String>,
    pub country: String,
    pub city: String,
    pub age: u32,
    pub date_of_birth: String,
    pub is_active: bool,
    pub is_suspended: bool,
    pub suspension_reason: Option<String>,
    pub deleted_at: Option<String>,
    pub two_factor_confirmed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
    /// Access tier, when the endpoint includes it.
    #[serde(default)]
    pub role: Option<String>,
}

/// Aggregate counters for the users dashboard header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_users: u64,
    pub active_users: u64,
    pub suspended_users: u64,
    pub verified_users: u64,
    pub pending_verification: u64,
    pub new_users_today: u64,
    pub new_users_this_week: u64,
    pub new_users_this_month: u64,
}

/// Account-status filter for the user list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    Active,
    Suspended,
}

impl StatusFilter {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Suspended => "suspended",
        }
    }
}

/// Verification filter for the user list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerificationFilter {
    Verified,
    Pending,
    Rejected,
}

impl VerificationFilter {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Pending => "pending",
            Self::Rejected => "rejected",
        }
    }
}

/// Sortable columns for the user list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Name,
    CreatedAt,
    LastSeenAt,
}

impl SortKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CreatedAt => "created_at",
            Self::LastSeenAt => "last_seen_at",
        }
    }
}

/// Sort direction for the user list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Query filters for `GET /api/admin/users`. `None` means "all" and the
/// parameter is omitted from the request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserFilters {
    pub search: Option<String>,
    pub status: Option<StatusFilter>,
    pub verification: Option<VerificationFilter>,
    pub role: Option<Role>,
    pub sort_by: Option<SortKey>,
    pub sort_order: Option<SortOrder>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl UserFilters {
    /// Query parameters to attach to the list request, omitting unset
    /// filters.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            if !search.is_empty() {
                pairs.push(("search", search.clone()));
            }
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_owned()));
        }
        if let Some(verification) = self.verification {
            pairs.push(("verification", verification.as_str().to_owned()));
        }
        if let Some(role) = self.role {
            pairs.push(("role", role.as_str().to_owned()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sort_by", sort_by.as_str().to_owned()));
        }
        if let Some(sort_order) = self.sort_order {
            pairs.push(("sort_order", sort_order.as_str().to_owned()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        pairs
    }
}

/// Pagination metadata attached to list responses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
}

/// Paginated user list payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UsersResponse {
    pub data: Vec<User>,
    pub meta: PageMeta,
}
