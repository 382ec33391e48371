//! Access-tier classification for console users.
//!
//! DESIGN
//! ======
//! The backend transmits roles as plain strings. Parsing is a closed match so
//! an unknown tier never grants access anywhere; callers treat `None` as "no
//! role" and fail closed.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use serde::{Deserialize, Serialize};

/// Access tier controlling which routes and features are reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full console access, including moderation and system configuration.
    Admin,
    /// Content writer; payout and chat tooling only.
    Writer,
    /// Regular platform user; account self-service only.
    User,
}

impl Role {
    /// Parse a backend role string. Unrecognized values yield `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "writer" => Some(Self::Writer),
            "user" => Some(Self::User),
            _ => None,
        }
    }

    /// Wire representation, matching what the backend sends.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Writer => "writer",
            Self::User => "user",
        }
    }
}
