//! HS256 encoding and decoding of [`Claims`].
//!
//! The codec checks structure and signature only. Expiry is judged by the
//! verifier against the injected clock.

use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, Header, Validation};

use ripple_core::error::{AppError, ErrorKind};

use super::claims::Claims;
use super::keys::SigningSecret;
use crate::error::AuthError;

/// Signs `claims` with `secret`.
pub fn encode(claims: &Claims, secret: &SigningSecret) -> Result<String, AuthError> {
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, secret.encoding_key()).map_err(
        |e| AuthError::Internal(AppError::with_source(ErrorKind::Internal, "Failed to sign token", e)),
    )
}

/// Checks the signature of `token` against `secret` and returns its claims.
pub fn decode(token: &str, secret: &SigningSecret) -> Result<Claims, AuthError> {
    jsonwebtoken::decode::<Claims>(token, secret.decoding_key(), &validation())
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            JwtErrorKind::InvalidSignature => AuthError::TokenSignatureInvalid,
            _ => AuthError::TokenMalformed,
        })
}

fn validation() -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "iat", "sub"]);
    validation
}
