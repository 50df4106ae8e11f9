//! Follow-graph handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use ripple_core::error::AppError;
use ripple_core::types::PageResponse;
use ripple_entity::follow::Follow;
use ripple_entity::user::UserSummary;

use crate::dto::request::FollowRequest;
use crate::dto::response::{ApiResponse, IsFollowingResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, Pagination, ValidatedJson, parse_uuid};
use crate::state::AppState;

const MSG_USER_NOT_FOUND: &str = "User not found";

/// POST /api/follows
pub async fn follow_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<FollowRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<Follow>>)> {
    if req.follower_id != auth.id() {
        return Err(AppError::authorization("You can only follow as yourself").into());
    }
    if req.follower_id == req.following_id {
        return Err(AppError::validation("You cannot follow yourself").into());
    }
    ensure_user_exists(&state, req.following_id).await?;

    let follow = state
        .follow_repo
        .create(req.follower_id, req.following_id)
        .await?;

    tracing::info!(follower_id = %follow.follower_id, following_id = %follow.following_id, "Follow created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(follow, "User followed")),
    ))
}

/// DELETE /api/follows/{user_id}/{following_id}, where `user_id` is the follower
pub async fn unfollow_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((follower_id, following_id)): Path<(String, String)>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let not_following = "You are not following this user";
    let follower_id = parse_uuid(&follower_id, not_following)?;
    let following_id = parse_uuid(&following_id, not_following)?;

    if follower_id != auth.id() {
        return Err(AppError::authorization("You can only unfollow as yourself").into());
    }
    if follower_id == following_id {
        return Err(AppError::validation("You cannot unfollow yourself").into());
    }
    if !state.follow_repo.delete(follower_id, following_id).await? {
        return Err(AppError::not_found(not_following).into());
    }

    tracing::info!(%follower_id, %following_id, "Follow removed");
    Ok(Json(ApiResponse::message("User unfollowed")))
}

/// GET /api/follows/{user_id}/is-following/{following_id}
pub async fn is_following(
    State(state): State<AppState>,
    Path((follower_id, following_id)): Path<(String, String)>,
) -> ApiResult<Json<ApiResponse<IsFollowingResponse>>> {
    let is_following = match (Uuid::parse_str(&follower_id), Uuid::parse_str(&following_id)) {
        (Ok(a), Ok(b)) => state.follow_repo.find(a, b).await?.is_some(),
        _ => false,
    };
    Ok(Json(ApiResponse::ok(IsFollowingResponse { is_following })))
}

/// GET /api/follows/{user_id}/followers
pub async fn list_followers(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<ApiResponse<PageResponse<UserSummary>>>> {
    let user_id = parse_uuid(&user_id, MSG_USER_NOT_FOUND)?;
    ensure_user_exists(&state, user_id).await?;
    let result = state.follow_repo.followers(user_id, &page).await?;
    Ok(Json(ApiResponse::ok(result)))
}

/// GET /api/follows/{user_id}/following
pub async fn list_following(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Pagination(page): Pagination,
) -> ApiResult<Json<ApiResponse<PageResponse<UserSummary>>>> {
    let user_id = parse_uuid(&user_id, MSG_USER_NOT_FOUND)?;
    ensure_user_exists(&state, user_id).await?;
    let result = state.follow_repo.following(user_id, &page).await?;
    Ok(Json(ApiResponse::ok(result)))
}

async fn ensure_user_exists(state: &AppState, id: Uuid) -> Result<(), AppError> {
    match state.user_repo.find_by_id(id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::not_found(MSG_USER_NOT_FOUND)),
    }
}
