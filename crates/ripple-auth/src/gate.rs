//! Access gate for protected routes.
//!
//! Turns the raw `Authorization` header value into a verified [`Identity`].
//! The HTTP wiring lives in the API crate; this type knows nothing about
//! requests so it can be exercised directly.

use std::sync::Arc;

use ripple_core::types::Identity;

use crate::error::AuthError;
use crate::jwt::{TokenType, TokenVerifier};

const BEARER_PREFIX: &str = "Bearer ";

/// Verifies bearer access tokens.
#[derive(Debug, Clone)]
pub struct AccessGate {
    verifier: Arc<TokenVerifier>,
}

impl AccessGate {
    /// Creates a gate backed by `verifier`.
    pub fn new(verifier: Arc<TokenVerifier>) -> Self {
        Self { verifier }
    }

    /// Authenticates a request from its `Authorization` header value.
    ///
    /// `None` means the header was absent. A header that is present but not
    /// valid UTF-8 should be passed as `Some("")`.
    pub fn authenticate(&self, header: Option<&str>) -> Result<Identity, AuthError> {
        let token = bearer_token(header)?;
        let claims = self
            .verifier
            .verify(token, TokenType::Access)
            .inspect_err(|e| tracing::debug!(reason = %e, "Rejected access token"))?;
        Ok(claims.identity())
    }
}

/// Extracts the token from `Bearer <token>`.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let value = header.ok_or(AuthError::TokenMissing)?;
    match value.strip_prefix(BEARER_PREFIX) {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => {
            tracing::debug!("Malformed Authorization header");
            Err(AuthError::InvalidAuthorizationHeader)
        }
    }
}
