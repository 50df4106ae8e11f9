//! Experience entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A piece of content published by a user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Experience {
    /// Unique identifier.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Category used for filtering.
    pub category: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Duration in minutes.
    pub duration: i32,
    /// Whether the experience is currently live.
    pub is_live: bool,
    /// Participant count.
    pub participants: i32,
    /// Engagement score.
    pub engagement: i32,
    /// Owning user.
    pub creator_id: Uuid,
    /// Creator display name at publication time.
    pub creator_name: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
}

impl Experience {
    /// Whether `user_id` owns this experience.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.creator_id == user_id
    }
}

/// Data required to create an experience.
#[derive(Debug, Clone)]
pub struct CreateExperience {
    /// Title.
    pub title: String,
    /// Description.
    pub description: Option<String>,
    /// Category.
    pub category: String,
    /// Tags.
    pub tags: Vec<String>,
    /// Duration in minutes.
    pub duration: i32,
    /// Live flag.
    pub is_live: bool,
    /// Owning user.
    pub creator_id: Uuid,
    /// Creator display name.
    pub creator_name: String,
}

/// Partial update. `Some(0)` and `Some(false)` are real values.
#[derive(Debug, Clone, Default)]
pub struct UpdateExperience {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub duration: Option<i32>,
    pub is_live: Option<bool>,
    pub participants: Option<i32>,
    pub engagement: Option<i32>,
}

/// Listing filter.
#[derive(Debug, Clone, Default)]
pub struct ExperienceFilter {
    /// Exact category match.
    pub category: Option<String>,
    /// When true, only live experiences are returned.
    pub live_only: bool,
}
