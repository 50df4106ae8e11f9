//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ripple_database::repositories::user::UserCounts;
use ripple_entity::experience::Experience;
use ripple_entity::user::User;
use ripple_entity::video::Video;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Always `true`; errors use `ApiErrorResponse`.
    pub success: bool,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Creates a successful response with a message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Creates a data-less acknowledgement.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Public view of an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    /// The public handle.
    pub user_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_id: user.handle,
            name: user.name,
            email: user.email,
            phone: user.phone,
            avatar: user.avatar,
            bio: user.bio,
            interests: user.interests,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Public profile with relation counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub followers_count: i64,
    pub following_count: i64,
    pub experiences_count: i64,
}

impl ProfileResponse {
    /// Combines a user row with its counts.
    pub fn new(user: User, counts: UserCounts) -> Self {
        Self {
            user: user.into(),
            followers_count: counts.followers_count,
            following_count: counts.following_count,
            experiences_count: counts.experiences_count,
        }
    }
}

/// Signup and login response: the profile plus a token pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub access_expires_at: DateTime<Utc>,
    pub refresh_expires_at: DateTime<Utc>,
}

/// Refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub access_expires_at: DateTime<Utc>,
}

/// Experience detail with its videos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceDetail {
    #[serde(flatten)]
    pub experience: Experience,
    pub videos: Vec<Video>,
}

/// Follow check result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IsFollowingResponse {
    pub is_following: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_only_omits_data() {
        let value = serde_json::to_value(ApiResponse::message("Logged out")).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Logged out");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_refresh_response_is_camel_case() {
        let value = serde_json::to_value(RefreshResponse {
            access_token: "t".to_string(),
            access_expires_at: DateTime::from_timestamp(0, 0).unwrap(),
        })
        .unwrap();
        assert_eq!(value["accessToken"], "t");
        assert!(value.get("accessExpiresAt").is_some());
    }
}
