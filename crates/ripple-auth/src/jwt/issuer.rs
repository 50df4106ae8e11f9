//! Token pair creation with independent lifetimes and secrets.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use ripple_core::config::AuthConfig;
use ripple_core::traits::Clock;
use ripple_core::types::Identity;

use super::claims::{Claims, TokenType};
use super::codec;
use super::keys::TokenKeys;
use crate::error::AuthError;

/// A single signed token and its expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The compact JWT.
    pub token: String,
    /// When the token stops verifying.
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful login or signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

/// Mints access and refresh tokens. Performs no storage access.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    keys: Arc<TokenKeys>,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    /// Creates an issuer from auth configuration.
    pub fn new(config: &AuthConfig, keys: Arc<TokenKeys>, clock: Arc<dyn Clock>) -> Self {
        Self {
            keys,
            access_ttl_seconds: i64::try_from(config.access_ttl_seconds).unwrap_or(i64::MAX / 2),
            refresh_ttl_seconds: i64::try_from(config.refresh_ttl_seconds).unwrap_or(i64::MAX / 2),
            clock,
        }
    }

    /// Generates an access + refresh pair from one clock reading.
    pub fn issue(&self, identity: &Identity) -> Result<TokenPair, AuthError> {
        let now = self.clock.now();
        let access = self.mint(identity, TokenType::Access, now)?;
        let refresh = self.mint(identity, TokenType::Refresh, now)?;

        tracing::debug!(user_id = %identity.id, "Issued token pair");

        Ok(TokenPair {
            access_token: access.token,
            refresh_token: refresh.token,
            access_expires_at: access.expires_at,
            refresh_expires_at: refresh.expires_at,
        })
    }

    /// Generates a standalone access token (after refresh).
    pub fn issue_access(&self, identity: &Identity) -> Result<IssuedToken, AuthError> {
        self.mint(identity, TokenType::Access, self.clock.now())
    }

    fn mint(
        &self,
        identity: &Identity,
        typ: TokenType,
        now: DateTime<Utc>,
    ) -> Result<IssuedToken, AuthError> {
        let ttl = match typ {
            TokenType::Access => self.access_ttl_seconds,
            TokenType::Refresh => self.refresh_ttl_seconds,
        };
        let claims = Claims::new(identity, typ, now, ttl);
        let token = codec::encode(&claims, self.keys.secret_for(typ))?;
        Ok(IssuedToken {
            token,
            expires_at: claims.expires_at(),
        })
    }
}
