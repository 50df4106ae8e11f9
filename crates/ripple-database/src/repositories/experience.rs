//! Experience repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use ripple_core::error::{AppError, ErrorKind};
use ripple_core::result::AppResult;
use ripple_core::types::{PageRequest, PageResponse};
use ripple_entity::experience::{
    CreateExperience, Experience, ExperienceFilter, UpdateExperience,
};

/// Repository for experience CRUD and listing.
#[derive(Debug, Clone)]
pub struct ExperienceRepository {
    pool: PgPool,
}

impl ExperienceRepository {
    /// Create a new experience repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an experience by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Experience>> {
        sqlx::query_as::<_, Experience>("SELECT * FROM experiences WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find experience", e)
            })
    }

    /// List experiences newest first, optionally filtered.
    pub async fn list(
        &self,
        filter: &ExperienceFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Experience>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM experiences \
             WHERE ($1::TEXT IS NULL OR category = $1) AND (NOT $2 OR is_live)",
        )
        .bind(&filter.category)
        .bind(filter.live_only)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count experiences", e))?;

        let items = sqlx::query_as::<_, Experience>(
            "SELECT * FROM experiences \
             WHERE ($1::TEXT IS NULL OR category = $1) AND (NOT $2 OR is_live) \
             ORDER BY created_at DESC LIMIT $3 OFFSET $4",
        )
        .bind(&filter.category)
        .bind(filter.live_only)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list experiences", e))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    /// List a creator's experiences newest first.
    pub async fn list_by_creator(
        &self,
        creator_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Experience>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM experiences WHERE creator_id = $1")
                .bind(creator_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count experiences", e)
                })?;

        let items = sqlx::query_as::<_, Experience>(
            "SELECT * FROM experiences WHERE creator_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(creator_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list experiences", e))?;

        Ok(PageResponse::new(items, page, total as u64))
    }

    /// Create a new experience.
    pub async fn create(&self, data: &CreateExperience) -> AppResult<Experience> {
        sqlx::query_as::<_, Experience>(
            "INSERT INTO experiences \
                (title, description, category, tags, duration, is_live, creator_id, creator_name) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.category)
        .bind(&data.tags)
        .bind(data.duration)
        .bind(data.is_live)
        .bind(data.creator_id)
        .bind(&data.creator_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create experience", e))
    }

    /// Apply a partial update.
    pub async fn update(&self, id: Uuid, data: &UpdateExperience) -> AppResult<Experience> {
        sqlx::query_as::<_, Experience>(
            "UPDATE experiences SET title = COALESCE($2, title), \
                                    description = COALESCE($3, description), \
                                    category = COALESCE($4, category), \
                                    tags = COALESCE($5, tags), \
                                    duration = COALESCE($6, duration), \
                                    is_live = COALESCE($7, is_live), \
                                    participants = COALESCE($8, participants), \
                                    engagement = COALESCE($9, engagement), \
                                    updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.category)
        .bind(&data.tags)
        .bind(data.duration)
        .bind(data.is_live)
        .bind(data.participants)
        .bind(data.engagement)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update experience", e))?
        .ok_or_else(|| AppError::not_found("Experience not found"))
    }

    /// Delete an experience. Returns `true` if a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete experience", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
