//! JWT claims structure shared by access and refresh tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ripple_core::types::Identity;

/// JWT claims payload embedded in every token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the account's internal id.
    pub sub: Uuid,
    /// The account's public handle at mint time.
    pub handle: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Whether this is an access or a refresh token.
    pub typ: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived token presented on API requests.
    Access,
    /// Long-lived token exchanged for new access tokens.
    Refresh,
}

impl Claims {
    /// Builds claims for `identity` valid for `ttl_seconds` from `issued_at`.
    pub fn new(identity: &Identity, typ: TokenType, issued_at: DateTime<Utc>, ttl_seconds: i64) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: identity.id,
            handle: identity.handle.clone(),
            iat,
            exp: iat + ttl_seconds,
            typ,
        }
    }

    /// The identity this token was minted for.
    pub fn identity(&self) -> Identity {
        Identity::new(self.sub, self.handle.clone())
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// A token is expired from the instant `exp` is reached.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Identity {
        Identity::new(Uuid::new_v4(), "alice")
    }

    #[test]
    fn test_wire_names() {
        let at = DateTime::from_timestamp(1_000, 0).expect("valid timestamp");
        let claims = Claims::new(&alice(), TokenType::Refresh, at, 60);
        let value = serde_json::to_value(&claims).expect("serialize");

        assert_eq!(value["handle"], "alice");
        assert_eq!(value["iat"], 1_000);
        assert_eq!(value["exp"], 1_060);
        assert_eq!(value["typ"], "refresh");
        assert!(value.get("sub").is_some());
    }

    #[test]
    fn test_expiry_boundary() {
        let at = DateTime::from_timestamp(1_000, 0).expect("valid timestamp");
        let claims = Claims::new(&alice(), TokenType::Access, at, 900);

        let just_before = DateTime::from_timestamp(1_899, 0).expect("valid timestamp");
        let exactly = DateTime::from_timestamp(1_900, 0).expect("valid timestamp");
        assert!(!claims.is_expired_at(just_before));
        assert!(claims.is_expired_at(exactly));
        assert_eq!(claims.expires_at(), exactly);
    }
}
