//! `AuthUser` extractor: reads the identity the access gate bound to the request.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use ripple_auth::error::MSG_TOKEN_MISSING;
use ripple_core::error::AppError;
use ripple_core::types::Identity;

use crate::error::ApiError;

/// Request extension inserted by `require_auth` after a successful check.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

/// Authenticated caller available in handlers behind the gate.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    /// The caller's internal id.
    pub fn id(&self) -> Uuid {
        self.0.id
    }

    /// The caller's handle at token mint time.
    pub fn handle(&self) -> &str {
        &self.0.handle
    }
}

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .map(|user| AuthUser(user.0.clone()))
            .ok_or_else(|| ApiError(AppError::authentication(MSG_TOKEN_MISSING)))
    }
}
