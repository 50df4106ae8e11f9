//! Health check and fallback handlers.

use axum::Json;
use chrono::Utc;

use ripple_core::error::AppError;

use crate::dto::response::HealthResponse;
use crate::error::ApiError;

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

/// Any unmatched route.
pub async fn not_found() -> ApiError {
    ApiError(AppError::not_found("Route not found"))
}
