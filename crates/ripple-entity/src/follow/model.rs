//! Follow edge model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A directed edge: `follower_id` follows `following_id`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Follow {
    /// Unique edge identifier.
    pub id: Uuid,
    /// The user doing the following.
    pub follower_id: Uuid,
    /// The user being followed.
    pub following_id: Uuid,
    /// When the edge was created.
    pub created_at: DateTime<Utc>,
}
