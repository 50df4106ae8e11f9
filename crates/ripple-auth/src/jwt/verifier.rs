//! Token verification against the injected clock.

use std::sync::Arc;

use ripple_core::traits::Clock;

use super::claims::{Claims, TokenType};
use super::codec;
use super::keys::{SigningSecret, TokenKeys};
use crate::error::AuthError;

/// Validates signature, kind, and expiry of presented tokens.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    keys: Arc<TokenKeys>,
    clock: Arc<dyn Clock>,
}

impl TokenVerifier {
    /// Creates a verifier over the given keys and clock.
    pub fn new(keys: Arc<TokenKeys>, clock: Arc<dyn Clock>) -> Self {
        Self { keys, clock }
    }

    /// Verifies `token` as a token of kind `expected`.
    ///
    /// A token of the other kind is rejected as a signature failure even if
    /// it was somehow signed with the matching secret.
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<Claims, AuthError> {
        let claims = codec::decode(token, self.keys.secret_for(expected))?;
        if claims.typ != expected {
            return Err(AuthError::TokenSignatureInvalid);
        }
        self.check_expiry(claims)
    }

    /// Verifies signature and expiry against an explicit secret.
    pub fn verify_with(&self, token: &str, secret: &SigningSecret) -> Result<Claims, AuthError> {
        let claims = codec::decode(token, secret)?;
        self.check_expiry(claims)
    }

    fn check_expiry(&self, claims: Claims) -> Result<Claims, AuthError> {
        if claims.is_expired_at(self.clock.now()) {
            return Err(AuthError::TokenExpired);
        }
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use ripple_core::traits::FixedClock;
    use ripple_core::types::Identity;
    use uuid::Uuid;

    use super::*;

    const T0: i64 = 1_700_000_000;

    fn setup() -> (Arc<FixedClock>, Arc<TokenKeys>, TokenVerifier) {
        let clock = Arc::new(FixedClock::from_timestamp(T0));
        let keys = Arc::new(TokenKeys::new("access-secret", "refresh-secret"));
        let verifier = TokenVerifier::new(keys.clone(), clock.clone());
        (clock, keys, verifier)
    }

    fn mint(keys: &TokenKeys, typ: TokenType, ttl: i64) -> (String, Claims) {
        let at = chrono::DateTime::from_timestamp(T0, 0).expect("valid timestamp");
        let claims = Claims::new(&Identity::new(Uuid::new_v4(), "alice"), typ, at, ttl);
        (codec::encode(&claims, keys.secret_for(typ)).unwrap(), claims)
    }

    #[test]
    fn test_valid_token_returns_claims() {
        let (_, keys, verifier) = setup();
        let (token, claims) = mint(&keys, TokenType::Access, 900);
        assert_eq!(verifier.verify(&token, TokenType::Access).unwrap(), claims);
    }

    #[test]
    fn test_expired_at_exact_boundary() {
        let (clock, keys, verifier) = setup();
        let (token, _) = mint(&keys, TokenType::Access, 900);

        clock.advance(Duration::seconds(899));
        assert!(verifier.verify(&token, TokenType::Access).is_ok());

        clock.advance(Duration::seconds(1));
        assert!(matches!(
            verifier.verify(&token, TokenType::Access),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn test_wrong_kind_rejected() {
        let (_, keys, verifier) = setup();
        let (refresh, _) = mint(&keys, TokenType::Refresh, 900);
        assert!(matches!(
            verifier.verify(&refresh, TokenType::Access),
            Err(AuthError::TokenSignatureInvalid)
        ));

        // Signed with the refresh secret but tagged as access.
        let at = chrono::DateTime::from_timestamp(T0, 0).expect("valid timestamp");
        let mislabeled = Claims::new(&Identity::new(Uuid::new_v4(), "eve"), TokenType::Access, at, 900);
        let token = codec::encode(&mislabeled, keys.secret_for(TokenType::Refresh)).unwrap();
        assert!(matches!(
            verifier.verify(&token, TokenType::Refresh),
            Err(AuthError::TokenSignatureInvalid)
        ));
    }

    #[test]
    fn test_verify_with_explicit_secret() {
        let (_, keys, verifier) = setup();
        let (token, _) = mint(&keys, TokenType::Access, 900);
        assert!(verifier.verify_with(&token, keys.secret_for(TokenType::Access)).is_ok());
        assert!(matches!(
            verifier.verify_with(&token, &SigningSecret::new("other")),
            Err(AuthError::TokenSignatureInvalid)
        ));
    }

    #[test]
    fn test_malformed_input() {
        let (_, _, verifier) = setup();
        assert!(matches!(
            verifier.verify("a.b.c", TokenType::Access),
            Err(AuthError::TokenMalformed)
        ));
    }
}
