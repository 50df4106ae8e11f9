//! Video repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use ripple_core::error::{AppError, ErrorKind};
use ripple_core::result::AppResult;
use ripple_core::types::{PageRequest, PageResponse};
use ripple_entity::video::{CreateVideo, UpdateVideo, Video};

/// Repository for video CRUD and the view counter.
#[derive(Debug, Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    /// Create a new video repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a video by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Video>> {
        sqlx::query_as::<_, Video>("SELECT * FROM videos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find video", e))
    }

    /// All videos attached to an experience, oldest first.
    pub async fn list_by_experience(&self, experience_id: Uuid) -> AppResult<Vec<Video>> {
        sqlx::query_as::<_, Video>(
            "SELECT * FROM videos WHERE experience_id = $1 ORDER BY created_at ASC",
        )
        .bind(experience_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list videos", e))
    }

    /// List a creator's videos newest first.
    pub async fn list_by_creator(
        &self,
        creator_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Video>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM videos WHERE creator_id = $1")
            .bind(creator_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count videos", e))?;

        let items = sqlx::query_as::<_, Video>(
            "SELECT * FROM videos WHERE creator_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(creator_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list videos", e))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    /// Create a new video.
    pub async fn create(&self, data: &CreateVideo) -> AppResult<Video> {
        sqlx::query_as::<_, Video>(
            "INSERT INTO videos \
                (title, description, url, thumbnail, duration, creator_id, creator_name, experience_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.url)
        .bind(&data.thumbnail)
        .bind(data.duration)
        .bind(data.creator_id)
        .bind(&data.creator_name)
        .bind(data.experience_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::validation("Referenced experience does not exist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create video", e),
        })
    }

    /// Apply a partial update.
    pub async fn update(&self, id: Uuid, data: &UpdateVideo) -> AppResult<Video> {
        sqlx::query_as::<_, Video>(
            "UPDATE videos SET title = COALESCE($2, title), \
                               description = COALESCE($3, description), \
                               thumbnail = COALESCE($4, thumbnail), \
                               duration = COALESCE($5, duration), \
                               updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.thumbnail)
        .bind(data.duration)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update video", e))?
        .ok_or_else(|| AppError::not_found("Video not found"))
    }

    /// Atomically increment the view counter.
    pub async fn increment_views(&self, id: Uuid) -> AppResult<Option<Video>> {
        sqlx::query_as::<_, Video>(
            "UPDATE videos SET views = views + 1 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update views", e))
    }

    /// Delete a video. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete video", e))?;
        Ok(result.rows_affected() > 0)
    }
}
