//! Refresh-token exchange.

use std::sync::Arc;

use ripple_core::traits::IdentityStore;

use crate::error::AuthError;
use crate::jwt::{IssuedToken, TokenIssuer, TokenType, TokenVerifier};

/// Mints new access tokens from valid refresh tokens.
///
/// The refresh token itself is not rotated; it stays valid until its own
/// expiry.
#[derive(Clone)]
pub struct SessionRefresher {
    verifier: Arc<TokenVerifier>,
    issuer: Arc<TokenIssuer>,
    identities: Arc<dyn IdentityStore>,
}

impl std::fmt::Debug for SessionRefresher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRefresher")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

impl SessionRefresher {
    /// Creates a refresher.
    pub fn new(
        verifier: Arc<TokenVerifier>,
        issuer: Arc<TokenIssuer>,
        identities: Arc<dyn IdentityStore>,
    ) -> Self {
        Self {
            verifier,
            issuer,
            identities,
        }
    }

    /// Verifies `refresh_token` and issues a fresh access token.
    ///
    /// The handle in the new token comes from the identity store, so a
    /// renamed account gets its current handle.
    pub async fn refresh(&self, refresh_token: &str) -> Result<IssuedToken, AuthError> {
        let claims = self
            .verifier
            .verify(refresh_token, TokenType::Refresh)
            .inspect_err(|e| tracing::debug!(reason = %e, "Rejected refresh token"))?;

        let identity = self
            .identities
            .find_identity(claims.sub)
            .await?
            .ok_or_else(|| {
                tracing::debug!(user_id = %claims.sub, "Refresh for missing account");
                AuthError::AccountNotFound
            })?;

        let token = self.issuer.issue_access(&identity)?;
        tracing::info!(user_id = %identity.id, "Access token refreshed");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::RwLock;

    use async_trait::async_trait;
    use chrono::Duration;
    use ripple_core::config::AuthConfig;
    use ripple_core::result::AppResult;
    use ripple_core::traits::FixedClock;
    use ripple_core::types::Identity;
    use uuid::Uuid;

    use super::*;
    use crate::jwt::TokenKeys;

    #[derive(Default)]
    struct MemoryStore(RwLock<HashMap<Uuid, Identity>>);

    #[async_trait]
    impl IdentityStore for MemoryStore {
        async fn find_identity(&self, id: Uuid) -> AppResult<Option<Identity>> {
            Ok(self.0.read().unwrap().get(&id).cloned())
        }
    }

    struct Fixture {
        clock: Arc<FixedClock>,
        store: Arc<MemoryStore>,
        issuer: Arc<TokenIssuer>,
        verifier: Arc<TokenVerifier>,
        refresher: SessionRefresher,
    }

    fn fixture() -> Fixture {
        let clock = Arc::new(FixedClock::from_timestamp(1_700_000_000));
        let config = AuthConfig::default();
        let keys = Arc::new(TokenKeys::from_config(&config));
        let issuer = Arc::new(TokenIssuer::new(&config, keys.clone(), clock.clone()));
        let verifier = Arc::new(TokenVerifier::new(keys, clock.clone()));
        let store = Arc::new(MemoryStore::default());
        let refresher = SessionRefresher::new(verifier.clone(), issuer.clone(), store.clone());
        Fixture {
            clock,
            store,
            issuer,
            verifier,
            refresher,
        }
    }

    fn register(store: &MemoryStore, handle: &str) -> Identity {
        let identity = Identity::new(Uuid::new_v4(), handle);
        store.0.write().unwrap().insert(identity.id, identity.clone());
        identity
    }

    #[tokio::test]
    async fn test_refresh_issues_access_token() {
        let f = fixture();
        let alice = register(&f.store, "alice");
        let pair = f.issuer.issue(&alice).unwrap();

        f.clock.advance(Duration::seconds(3_600));
        let fresh = f.refresher.refresh(&pair.refresh_token).await.unwrap();

        let claims = f.verifier.verify(&fresh.token, TokenType::Access).unwrap();
        assert_eq!(claims.sub, alice.id);
        assert_eq!(claims.iat, 1_700_003_600);
    }

    #[tokio::test]
    async fn test_handle_comes_from_store() {
        let f = fixture();
        let alice = register(&f.store, "alice");
        let pair = f.issuer.issue(&alice).unwrap();

        f.store
            .0
            .write()
            .unwrap()
            .insert(alice.id, Identity::new(alice.id, "alice2"));

        let fresh = f.refresher.refresh(&pair.refresh_token).await.unwrap();
        let claims = f.verifier.verify(&fresh.token, TokenType::Access).unwrap();
        assert_eq!(claims.handle, "alice2");
    }

    #[tokio::test]
    async fn test_access_token_is_not_a_refresh_token() {
        let f = fixture();
        let alice = register(&f.store, "alice");
        let pair = f.issuer.issue(&alice).unwrap();

        let err = f.refresher.refresh(&pair.access_token).await.unwrap_err();
        assert!(matches!(err, AuthError::TokenSignatureInvalid));
    }

    #[tokio::test]
    async fn test_deleted_account() {
        let f = fixture();
        let ghost = Identity::new(Uuid::new_v4(), "ghost");
        let pair = f.issuer.issue(&ghost).unwrap();

        let err = f.refresher.refresh(&pair.refresh_token).await.unwrap_err();
        assert!(matches!(err, AuthError::AccountNotFound));
    }

    #[tokio::test]
    async fn test_expired_refresh_token() {
        let f = fixture();
        let alice = register(&f.store, "alice");
        let pair = f.issuer.issue(&alice).unwrap();

        f.clock.advance(Duration::seconds(604_800));
        let err = f.refresher.refresh(&pair.refresh_token).await.unwrap_err();
        assert!(matches!(err, AuthError::TokenExpired));
    }
}
