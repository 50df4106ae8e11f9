//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use ripple_entity::experience::UpdateExperience;
use ripple_entity::user::UpdateUser;
use ripple_entity::video::UpdateVideo;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Desired public handle.
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "userId is required"))]
    pub user_id: String,
    /// Display name.
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    /// Plaintext password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Email address.
    #[validate(email(message = "Email is invalid"))]
    pub email: Option<String>,
    /// Phone number.
    #[validate(length(min = 1, max = 20, message = "Phone is invalid"))]
    pub phone: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email, phone, or handle.
    #[serde(default)]
    #[validate(length(min = 1, message = "Email/phone is required"))]
    pub email_or_phone: String,
    /// Plaintext password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    /// Refresh token.
    #[serde(default)]
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

/// Profile update. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must not be empty"))]
    pub name: Option<String>,
    pub bio: Option<String>,
    #[validate(length(max = 500))]
    pub avatar: Option<String>,
    pub interests: Option<Vec<String>>,
}

impl From<UpdateProfileRequest> for UpdateUser {
    fn from(req: UpdateProfileRequest) -> Self {
        Self {
            name: req.name,
            bio: req.bio,
            avatar: req.avatar,
            interests: req.interests,
        }
    }
}

/// Experience creation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateExperienceRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 50, message = "Category is required"))]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Duration in minutes.
    #[serde(default)]
    #[validate(range(min = 1, message = "Duration is required"))]
    pub duration: i32,
    #[serde(default, alias = "isLive")]
    pub is_live: bool,
}

/// Experience partial update. `0` and `false` are applied as values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateExperienceRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: Option<i32>,
    #[serde(alias = "isLive")]
    pub is_live: Option<bool>,
    #[validate(range(min = 0))]
    pub participants: Option<i32>,
    #[validate(range(min = 0))]
    pub engagement: Option<i32>,
}

impl From<UpdateExperienceRequest> for UpdateExperience {
    fn from(req: UpdateExperienceRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            category: req.category,
            tags: req.tags,
            duration: req.duration,
            is_live: req.is_live,
            participants: req.participants,
            engagement: req.engagement,
        }
    }
}

/// Listing filter for `GET /api/experiences`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceQuery {
    pub category: Option<String>,
    /// Only `true` (any case) enables the filter.
    pub is_live: Option<String>,
}

impl ExperienceQuery {
    /// Whether only live experiences were requested.
    pub fn live_only(&self) -> bool {
        self.is_live
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

/// Video creation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVideoRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, max = 500, message = "URL is required"))]
    pub url: String,
    pub thumbnail: Option<String>,
    /// Duration in seconds.
    #[serde(default)]
    #[validate(range(min = 1, message = "Duration is required"))]
    pub duration: i32,
    #[serde(alias = "experienceId")]
    pub experience_id: Option<Uuid>,
}

/// Video partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateVideoRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: Option<i32>,
}

impl From<UpdateVideoRequest> for UpdateVideo {
    fn from(req: UpdateVideoRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            thumbnail: req.thumbnail,
            duration: req.duration,
        }
    }
}

/// Follow request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    pub follower_id: Uuid,
    pub following_id: Uuid,
}
