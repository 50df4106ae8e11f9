//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use ripple_core::types::Identity;

/// A registered account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Internal record identifier.
    pub id: Uuid,
    /// Public handle chosen at signup.
    pub handle: String,
    /// Display name.
    pub name: String,
    /// Email address (optional, unique).
    pub email: Option<String>,
    /// Phone number (optional, unique).
    pub phone: Option<String>,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Avatar URL.
    pub avatar: Option<String>,
    /// Free-form biography.
    pub bio: Option<String>,
    /// Interest tags.
    pub interests: Vec<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// The identity embedded in this user's tokens.
    pub fn identity(&self) -> Identity {
        Identity::new(self.id, self.handle.clone())
    }
}

/// Public fields shown in follower/following lists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    /// Internal record identifier.
    pub id: Uuid,
    /// Public handle.
    pub handle: String,
    /// Display name.
    pub name: String,
    /// Avatar URL.
    pub avatar: Option<String>,
}

/// Data required to create a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Desired handle.
    pub handle: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// Partial profile update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    /// New display name.
    pub name: Option<String>,
    /// New biography.
    pub bio: Option<String>,
    /// New avatar URL.
    pub avatar: Option<String>,
    /// Replacement interest list.
    pub interests: Option<Vec<String>>,
}
