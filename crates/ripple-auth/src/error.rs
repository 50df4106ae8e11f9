//! Authentication failure taxonomy.

use thiserror::Error;

use ripple_core::error::AppError;

/// Message returned when a protected route is called without a header.
pub const MSG_TOKEN_MISSING: &str = "No token provided";
/// Message returned when the header is present but not a usable bearer token.
pub const MSG_INVALID_HEADER: &str = "Invalid token";
/// Message returned when the bearer token fails verification.
pub const MSG_INVALID_OR_EXPIRED: &str = "Invalid or expired token";
/// Message returned when a refresh token fails verification.
pub const MSG_REFRESH_INVALID: &str = "Refresh token invalid or expired";
/// Message returned when a refresh token names a deleted account.
pub const MSG_ACCOUNT_NOT_FOUND: &str = "Account not found";

/// Why a token or request failed authentication.
///
/// The first three variants are verification failures. Callers facing the
/// network collapse them into one message; they stay distinct for tests
/// and debug logs.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token is not a well-formed JWT for this service.
    #[error("token is malformed")]
    TokenMalformed,

    /// The signature does not match, or the token is of the wrong kind.
    #[error("token signature is invalid")]
    TokenSignatureInvalid,

    /// The token's `exp` is at or before the current time.
    #[error("token has expired")]
    TokenExpired,

    /// No `Authorization` header was sent.
    #[error("No token provided")]
    TokenMissing,

    /// The `Authorization` header is not `Bearer <token>`.
    #[error("Invalid token")]
    InvalidAuthorizationHeader,

    /// The token is valid but its account no longer exists.
    #[error("Account not found")]
    AccountNotFound,

    /// Signing or identity lookup failed.
    #[error(transparent)]
    Internal(#[from] AppError),
}

impl AuthError {
    /// Whether this is a codec or verifier failure.
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            Self::TokenMalformed | Self::TokenSignatureInvalid | Self::TokenExpired
        )
    }

    /// Maps a failure of the access gate to the error sent to the client.
    pub fn into_gate_error(self) -> AppError {
        match self {
            Self::TokenMissing => AppError::authentication(MSG_TOKEN_MISSING),
            Self::InvalidAuthorizationHeader => AppError::authentication(MSG_INVALID_HEADER),
            Self::Internal(err) => err,
            _ => AppError::authentication(MSG_INVALID_OR_EXPIRED),
        }
    }

    /// Maps a failure of the refresh flow to the error sent to the client.
    pub fn into_refresh_error(self) -> AppError {
        match self {
            Self::AccountNotFound => AppError::not_found(MSG_ACCOUNT_NOT_FOUND),
            Self::Internal(err) => err,
            _ => AppError::authentication(MSG_REFRESH_INVALID),
        }
    }
}

#[cfg(test)]
mod tests {
    use ripple_core::error::ErrorKind;

    use super::*;

    #[test]
    fn test_gate_collapses_verification_failures() {
        for err in [
            AuthError::TokenMalformed,
            AuthError::TokenSignatureInvalid,
            AuthError::TokenExpired,
        ] {
            assert!(err.is_verification_failure());
            let app = err.into_gate_error();
            assert_eq!(app.kind, ErrorKind::Authentication);
            assert_eq!(app.message, MSG_INVALID_OR_EXPIRED);
        }
    }

    #[test]
    fn test_gate_header_messages() {
        assert_eq!(AuthError::TokenMissing.into_gate_error().message, MSG_TOKEN_MISSING);
        assert_eq!(
            AuthError::InvalidAuthorizationHeader.into_gate_error().message,
            MSG_INVALID_HEADER
        );
    }

    #[test]
    fn test_refresh_messages() {
        let expired = AuthError::TokenExpired.into_refresh_error();
        assert_eq!(expired.kind, ErrorKind::Authentication);
        assert_eq!(expired.message, MSG_REFRESH_INVALID);

        let gone = AuthError::AccountNotFound.into_refresh_error();
        assert_eq!(gone.kind, ErrorKind::NotFound);
        assert_eq!(gone.message, MSG_ACCOUNT_NOT_FOUND);
    }

    #[test]
    fn test_internal_passes_through() {
        let err = AuthError::from(AppError::database("pool closed"));
        assert!(!err.is_verification_failure());
        assert_eq!(err.into_refresh_error().kind, ErrorKind::Database);
    }
}
