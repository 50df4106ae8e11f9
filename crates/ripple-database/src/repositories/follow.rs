//! Follow-graph repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use ripple_core::error::{AppError, ErrorKind};
use ripple_core::result::AppResult;
use ripple_core::types::{PageRequest, PageResponse};
use ripple_entity::follow::Follow;
use ripple_entity::user::UserSummary;

/// Repository for follow edges.
#[derive(Debug, Clone)]
pub struct FollowRepository {
    pool: PgPool,
}

impl FollowRepository {
    /// Create a new follow repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the edge `follower_id -> following_id`.
    pub async fn find(&self, follower_id: Uuid, following_id: Uuid) -> AppResult<Option<Follow>> {
        sqlx::query_as::<_, Follow>(
            "SELECT * FROM follows WHERE follower_id = $1 AND following_id = $2",
        )
        .bind(follower_id)
        .bind(following_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find follow", e))
    }

    /// Create an edge. A duplicate edge is a conflict.
    pub async fn create(&self, follower_id: Uuid, following_id: Uuid) -> AppResult<Follow> {
        sqlx::query_as::<_, Follow>(
            "INSERT INTO follows (follower_id, following_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(follower_id)
        .bind(following_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("unique_follow") => {
                AppError::conflict("Already following this user")
            }
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found("User not found")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create follow", e),
        })
    }

    /// Remove an edge. Returns `true` if it existed.
    pub async fn delete(&self, follower_id: Uuid, following_id: Uuid) -> AppResult<bool> {
        let result =
            sqlx::query("DELETE FROM follows WHERE follower_id = $1 AND following_id = $2")
                .bind(follower_id)
                .bind(following_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete follow", e)
                })?;
        Ok(result.rows_affected() > 0)
    }

    /// Users following `user_id`, most recent first.
    pub async fn followers(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<UserSummary>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM follows WHERE following_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count followers", e)
            })?;

        let items = sqlx::query_as::<_, UserSummary>(
            "SELECT u.id, u.handle, u.name, u.avatar FROM follows f \
             JOIN users u ON u.id = f.follower_id \
             WHERE f.following_id = $1 \
             ORDER BY f.created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list followers", e))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    /// Users `user_id` follows, most recent first.
    pub async fn following(
        &self,
        user_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<UserSummary>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM follows WHERE follower_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count following", e)
            })?;

        let items = sqlx::query_as::<_, UserSummary>(
            "SELECT u.id, u.handle, u.name, u.avatar FROM follows f \
             JOIN users u ON u.id = f.following_id \
             WHERE f.follower_id = $1 \
             ORDER BY f.created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list following", e))?;

        Ok(PageResponse::new(items, page, total as u64))
    }
}
