//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use ripple_core::error::{AppError, ErrorKind};
use ripple_core::result::AppResult;
use ripple_core::traits::IdentityStore;
use ripple_core::types::Identity;
use ripple_entity::user::{CreateUser, UpdateUser, User};

/// Follower, following, and experience counts for a profile page.
#[derive(Debug, Clone, Copy, Default, sqlx::FromRow)]
pub struct UserCounts {
    /// Users following this user.
    pub followers_count: i64,
    /// Users this user follows.
    pub following_count: i64,
    /// Experiences created by this user.
    pub experiences_count: i64,
}

/// Repository for account rows and credential lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by public handle, or by internal id when `key` is a UUID.
    pub async fn find_by_handle_or_id(&self, key: &str) -> AppResult<Option<User>> {
        let as_id = Uuid::parse_str(key).ok();
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE handle = $1 OR id = $2 LIMIT 1")
            .bind(key)
            .bind(as_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))
    }

    /// Find the account a login identifier refers to: email, phone, or handle.
    pub async fn find_by_login(&self, login: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE email = $1 OR phone = $1 OR handle = $1 LIMIT 1",
        )
        .bind(login)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by login", e))
    }

    /// Whether any account already uses the handle, email, or phone.
    pub async fn exists_any(
        &self,
        handle: &str,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE handle = $1 OR email = $2 OR phone = $3)",
        )
        .bind(handle)
        .bind(email)
        .bind(phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check user existence", e))
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (handle, name, email, phone, password_hash) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(&data.handle)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if matches!(
                    db_err.constraint(),
                    Some("users_handle_key" | "users_email_key" | "users_phone_key")
                ) =>
            {
                AppError::conflict("User already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Apply a partial profile update.
    pub async fn update(&self, id: Uuid, data: &UpdateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET name = COALESCE($2, name), \
                              bio = COALESCE($3, bio), \
                              avatar = COALESCE($4, avatar), \
                              interests = COALESCE($5, interests), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.bio)
        .bind(&data.avatar)
        .bind(&data.interests)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update user", e))?
        .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Follower, following, and experience counts for a user.
    pub async fn counts(&self, id: Uuid) -> AppResult<UserCounts> {
        sqlx::query_as::<_, UserCounts>(
            "SELECT \
                (SELECT COUNT(*) FROM follows WHERE following_id = $1) AS followers_count, \
                (SELECT COUNT(*) FROM follows WHERE follower_id = $1) AS following_count, \
                (SELECT COUNT(*) FROM experiences WHERE creator_id = $1) AS experiences_count",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count user relations", e))
    }
}

#[async_trait]
impl IdentityStore for UserRepository {
    async fn find_identity(&self, id: Uuid) -> AppResult<Option<Identity>> {
        sqlx::query_as::<_, (Uuid, String)>("SELECT id, handle FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(|(id, handle)| Identity::new(id, handle)))
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load identity", e))
    }
}
