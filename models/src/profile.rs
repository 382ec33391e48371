//! Content-profile records managed by the console.

use serde::{Deserialize, Serialize};

/// A writer-operated content profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,
    pub age: u32,
    pub bio: String,
    pub interests: Vec<String>,
    pub profile_photo: String,
    #[serde(default)]
    pub gallery: Vec<GalleryPhoto>,
    pub country: String,
    pub city: String,
    pub is_online: bool,
    pub last_seen_at: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub total_chats: u64,
    pub response_rate: f64,
    pub average_response_time: Option<f64>,
    /// Formatted currency amount as the backend renders it.
    pub total_earnings: String,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

/// One image in a profile's gallery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GalleryPhoto {
    pub id: i64,
    pub profile_id: i64,
    pub image_path: String,
    pub sort_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

/// Body for `POST /api/profiles`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateProfileRequest {
    pub name: String,
    pub age: u32,
    pub bio: String,
    pub interests: Vec<String>,
    pub country: String,
    pub city: String,
}

/// Partial update body; unset fields are left unchanged by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

/// Activity filter for the profile list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileStatus {
    Active,
    Inactive,
}

impl ProfileStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Body for assigning writers to a profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AssignWritersRequest {
    pub writer_ids: Vec<i64>,
}

/// Body for toggling a profile's presented online status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OnlineStatusRequest {
    pub is_online: bool,
}
