//! Token signing configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Secrets and lifetimes for access and refresh tokens.
///
/// The two secrets must differ: a refresh token must never verify as an
/// access token and vice versa.
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret for access tokens.
    #[serde(default = "default_access_secret")]
    pub access_secret: String,
    /// HMAC-SHA256 secret for refresh tokens.
    #[serde(default = "default_refresh_secret")]
    pub refresh_secret: String,
    /// Access token lifetime in seconds.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_seconds: u64,
    /// Refresh token lifetime in seconds.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_seconds: u64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("access_secret", &"<redacted>")
            .field("refresh_secret", &"<redacted>")
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_ttl_seconds", &self.refresh_ttl_seconds)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            access_secret: default_access_secret(),
            refresh_secret: default_refresh_secret(),
            access_ttl_seconds: default_access_ttl(),
            refresh_ttl_seconds: default_refresh_ttl(),
        }
    }
}

impl AuthConfig {
    /// Validates secrets and lifetimes.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.access_secret.is_empty() || self.refresh_secret.is_empty() {
            return Err(AppError::configuration("Token secrets must not be empty"));
        }
        if self.access_secret == self.refresh_secret {
            return Err(AppError::configuration(
                "access_secret and refresh_secret must be different",
            ));
        }
        if self.access_ttl_seconds == 0 {
            return Err(AppError::configuration(
                "access_ttl_seconds must be greater than zero",
            ));
        }
        if self.refresh_ttl_seconds <= self.access_ttl_seconds {
            return Err(AppError::configuration(
                "refresh_ttl_seconds must be greater than access_ttl_seconds",
            ));
        }
        Ok(())
    }
}

fn default_access_secret() -> String {
    "jwt-secret-key".to_string()
}

fn default_refresh_secret() -> String {
    "jwt-refresh-secret-key".to_string()
}

fn default_access_ttl() -> u64 {
    900
}

fn default_refresh_ttl() -> u64 {
    604_800
}
