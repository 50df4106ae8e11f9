//! Video handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use ripple_core::error::AppError;
use ripple_core::types::PageResponse;
use ripple_entity::video::{CreateVideo, Video};

use crate::dto::request::{CreateVideoRequest, UpdateVideoRequest};
use crate::dto::response::ApiResponse;
use crate::error::{ApiError, ApiResult};
use crate::extractors::{AuthUser, Pagination, ValidatedJson, parse_uuid};
use crate::state::AppState;

const MSG_NOT_FOUND: &str = "Video not found";

/// GET /api/videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Video>>> {
    let id = parse_uuid(&id, MSG_NOT_FOUND)?;
    let video = state
        .video_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(MSG_NOT_FOUND))?;
    Ok(Json(ApiResponse::ok(video)))
}

/// GET /api/videos/creator/{creator_id}
pub async fn list_by_creator(
    State(state): State<AppState>,
    Path(creator_id): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<ApiResponse<PageResponse<Video>>>> {
    let creator_id = parse_uuid(&creator_id, "User not found")?;
    let result = state.video_repo.list_by_creator(creator_id, &page).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// POST /api/videos
pub async fn create_video(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateVideoRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Video>>)> {
    let creator = state
        .user_repo
        .find_by_id(auth.id())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let video = state
        .video_repo
        .create(&CreateVideo {
            title: req.title,
            description: req.description,
            url: req.url,
            thumbnail: req.thumbnail,
            duration: req.duration,
            creator_id: creator.id,
            creator_name: creator.name,
            experience_id: req.experience_id,
        })
        .await?;

    tracing::info!(video_id = %video.id, creator_id = %auth.id(), "Video created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(video, "Video created")),
    ))
}

/// PATCH /api/videos/{id}
pub async fn update_video(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateVideoRequest>,
) -> ApiResult<Json<ApiResponse<Video>>> {
    let id = load_owned(&state, &auth, &id, "update").await?;
    let video = state.video_repo.update(id, &req.into()).await?;
    Ok(Json(ApiResponse::with_message(video, "Video updated")))
}

/// PATCH /api/videos/{id}/views
pub async fn increment_views(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Video>>> {
    let id = parse_uuid(&id, MSG_NOT_FOUND)?;
    let video = state
        .video_repo
        .increment_views(id)
        .await?
        .ok_or_else(|| AppError::not_found(MSG_NOT_FOUND))?;
    Ok(Json(ApiResponse::with_message(video, "Views updated")))
}

/// DELETE /api/videos/{id}
pub async fn delete_video(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let id = load_owned(&state, &auth, &id, "delete").await?;
    if !state.video_repo.delete(id).await? {
        return Err(AppError::not_found(MSG_NOT_FOUND).into());
    }
    tracing::info!(video_id = %id, "Video deleted");
    Ok(Json(ApiResponse::message("Video deleted")))
}

async fn load_owned(
    state: &AppState,
    auth: &AuthUser,
    raw_id: &str,
    action: &str,
) -> Result<Uuid, ApiError> {
    let id = parse_uuid(raw_id, MSG_NOT_FOUND)?;
    let video = state
        .video_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(MSG_NOT_FOUND))?;

    if !video.is_owned_by(auth.id()) {
        return Err(AppError::authorization(format!(
            "You do not have permission to {action} this video"
        ))
        .into());
    }
    Ok(id)
}
