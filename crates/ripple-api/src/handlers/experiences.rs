//! Experience handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use ripple_core::error::AppError;
use ripple_core::types::PageResponse;
use ripple_entity::experience::{CreateExperience, Experience, ExperienceFilter};

use crate::dto::request::{CreateExperienceRequest, ExperienceQuery, UpdateExperienceRequest};
use crate::dto::response::{ApiResponse, ExperienceDetail};
use crate::error::{ApiError, ApiResult};
use crate::extractors::{AuthUser, Pagination, ValidatedJson, parse_uuid};
use crate::state::AppState;

const MSG_NOT_FOUND: &str = "Experience not found";

/// GET /api/experiences
pub async fn list_experiences(
    State(state): State<AppState>,
    query: Result<Query<ExperienceQuery>, axum::extract::rejection::QueryRejection>,
    Pagination(page): Pagination,
) -> ApiResult<Json<ApiResponse<PageResponse<Experience>>>> {
    let Query(query) = query?;
    let filter = ExperienceFilter {
        live_only: query.live_only(),
        category: query.category.filter(|c| !c.is_empty()),
    };
    let result = state.experience_repo.list(&filter, &page).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/experiences/{id}
pub async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<ExperienceDetail>>> {
    let id = parse_uuid(&id, MSG_NOT_FOUND)?;
    let experience = state
        .experience_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(MSG_NOT_FOUND))?;
    let videos = state.video_repo.list_by_experience(id).await?;

    Ok(Json(ApiResponse::ok(ExperienceDetail { experience, videos })))
}

/// GET /api/experiences/creator/{creator_id}
pub async fn list_by_creator(
    State(state): State<AppState>,
    Path(creator_id): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<ApiResponse<PageResponse<Experience>>>> {
    let creator_id = parse_uuid(&creator_id, "User not found")?;
    let result = state.experience_repo.list_by_creator(creator_id, &page).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// POST /api/experiences
pub async fn create_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateExperienceRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Experience>>)> {
    let creator = state
        .user_repo
        .find_by_id(auth.id())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let experience = state
        .experience_repo
        .create(&CreateExperience {
            title: req.title,
            description: req.description,
            category: req.category,
            tags: req.tags,
            duration: req.duration,
            is_live: req.is_live,
            creator_id: creator.id,
            creator_name: creator.name,
        })
        .await?;

    tracing::info!(experience_id = %experience.id, creator_id = %auth.id(), "Experience created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(experience, "Experience created")),
    ))
}

/// PATCH /api/experiences/{id}
pub async fn update_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateExperienceRequest>,
) -> ApiResult<Json<ApiResponse<Experience>>> {
    let id = load_owned(&state, &auth, &id, "update").await?;
    let experience = state.experience_repo.update(id, &req.into()).await?;
    Ok(Json(ApiResponse::with_message(experience, "Experience updated")))
}

/// DELETE /api/experiences/{id}
pub async fn delete_experience(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let id = load_owned(&state, &auth, &id, "delete").await?;
    if !state.experience_repo.delete(id).await? {
        return Err(AppError::not_found(MSG_NOT_FOUND).into());
    }
    tracing::info!(experience_id = %id, "Experience deleted");
    Ok(Json(ApiResponse::message("Experience deleted")))
}

/// Resolves the id and checks the caller owns the experience.
async fn load_owned(
    state: &AppState,
    auth: &AuthUser,
    raw_id: &str,
    action: &str,
) -> Result<uuid::Uuid, ApiError> {
    let id = parse_uuid(raw_id, MSG_NOT_FOUND)?;
    let experience = state
        .experience_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(MSG_NOT_FOUND))?;

    if !experience.is_owned_by(auth.id()) {
        return Err(AppError::authorization(format!(
            "You do not have permission to {action} this experience"
        ))
        .into());
    }
    Ok(id)
}
