//! Account handlers: signup, login, refresh, logout, profile.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use ripple_core::error::AppError;
use ripple_entity::user::CreateUser;

use crate::dto::request::{LoginRequest, RefreshRequest, SignupRequest, UpdateProfileRequest};
use crate::dto::response::{
    ApiResponse, AuthResponse, ProfileResponse, RefreshResponse, UserResponse,
};
use crate::error::{ApiError, ApiResult};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";
const MSG_USER_NOT_FOUND: &str = "User not found";

/// POST /api/users/signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> ApiResult<(StatusCode, Json<ApiResponse<AuthResponse>>)> {
    if state
        .user_repo
        .exists_any(&req.user_id, req.email.as_deref(), req.phone.as_deref())
        .await?
    {
        return Err(AppError::conflict("User already exists").into());
    }

    let password_hash = state.password_hasher.hash_password(&req.password)?;
    let user = state
        .user_repo
        .create(&CreateUser {
            handle: req.user_id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            password_hash,
        })
        .await?;

    let tokens = state
        .token_issuer
        .issue(&user.identity())?;

    tracing::info!(user_id = %user.id, handle = %user.handle, "Account created");

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            AuthResponse {
                user: user.into(),
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
                access_expires_at: tokens.access_expires_at,
                refresh_expires_at: tokens.refresh_expires_at,
            },
            "Account created",
        )),
    ))
}

/// POST /api/users/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<ApiResponse<AuthResponse>>> {
    let user = state
        .user_repo
        .find_by_login(&req.email_or_phone)
        .await?
        .ok_or_else(|| AppError::authentication(MSG_INVALID_CREDENTIALS))?;

    if !state
        .password_hasher
        .verify_password(&req.password, &user.password_hash)?
    {
        tracing::debug!(user_id = %user.id, "Password mismatch");
        return Err(AppError::authentication(MSG_INVALID_CREDENTIALS).into());
    }

    let tokens = state
        .token_issuer
        .issue(&user.identity())?;

    tracing::info!(user_id = %user.id, "Login succeeded");

    Ok(Json(ApiResponse::with_message(
        AuthResponse {
            user: user.into(),
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            access_expires_at: tokens.access_expires_at,
            refresh_expires_at: tokens.refresh_expires_at,
        },
        "Login successful",
    )))
}

/// POST /api/users/refresh
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RefreshRequest>,
) -> ApiResult<Json<ApiResponse<RefreshResponse>>> {
    let issued = state
        .session_refresher
        .refresh(&req.refresh_token)
        .await
        .map_err(|e| ApiError(e.into_refresh_error()))?;

    Ok(Json(ApiResponse::with_message(
        RefreshResponse {
            access_token: issued.token,
            access_expires_at: issued.expires_at,
        },
        "Token refreshed",
    )))
}

/// POST /api/users/logout
///
/// Tokens are stateless; the client discards them.
pub async fn logout() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("Logged out"))
}

/// GET /api/users/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state
        .user_repo
        .find_by_id(auth.id())
        .await?
        .ok_or_else(|| AppError::not_found(MSG_USER_NOT_FOUND))?;

    Ok(Json(ApiResponse::ok(user.into())))
}

/// PATCH /api/users/me
pub async fn update_me(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state.user_repo.update(auth.id(), &req.into()).await?;
    Ok(Json(ApiResponse::with_message(user.into(), "Profile updated")))
}

/// GET /api/users/{id_or_handle}
pub async fn get_user(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<Json<ApiResponse<ProfileResponse>>> {
    let user = state
        .user_repo
        .find_by_handle_or_id(&key)
        .await?
        .ok_or_else(|| AppError::not_found(MSG_USER_NOT_FOUND))?;
    let counts = state.user_repo.counts(user.id).await?;

    Ok(Json(ApiResponse::ok(ProfileResponse::new(user, counts))))
}
