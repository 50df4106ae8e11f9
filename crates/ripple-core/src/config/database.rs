//! PostgreSQL settings for the account, experience, video, and follow tables.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Where the Ripple tables live and how many connections to keep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// `postgres://` or `postgresql://` URL.
    pub url: String,
    /// Upper bound on pooled connections.
    #[serde(default = "default_pool_max")]
    pub max_connections: u32,
    /// Connections kept open while idle.
    #[serde(default = "default_pool_min")]
    pub min_connections: u32,
    /// How long a request waits for a free connection.
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_seconds: u64,
    /// Idle connections above the minimum are closed after this long.
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_seconds: u64,
}

impl DatabaseConfig {
    /// Rejects an empty URL or an inverted pool range.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.url.starts_with("postgres://") || self.url.starts_with("postgresql://")) {
            return Err(AppError::configuration(
                "database.url must be a postgres:// or postgresql:// URL",
            ));
        }
        if self.max_connections == 0 || self.min_connections > self.max_connections {
            return Err(AppError::configuration(
                "database.min_connections must not exceed a non-zero max_connections",
            ));
        }
        Ok(())
    }
}

fn default_pool_max() -> u32 {
    20
}

fn default_pool_min() -> u32 {
    2
}

fn default_acquire_timeout() -> u64 {
    10
}

fn default_idle_timeout() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, min: u32, max: u32) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            max_connections: max,
            min_connections: min,
            acquire_timeout_seconds: default_acquire_timeout(),
            idle_timeout_seconds: default_idle_timeout(),
        }
    }

    #[test]
    fn test_accepts_both_schemes() {
        assert!(config("postgres://localhost/ripple_db", 2, 20).validate().is_ok());
        assert!(config("postgresql://localhost/ripple_db", 0, 1).validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_settings() {
        assert!(config("", 2, 20).validate().is_err());
        assert!(config("mysql://localhost/ripple_db", 2, 20).validate().is_err());
        assert!(config("postgres://localhost/ripple_db", 5, 2).validate().is_err());
        assert!(config("postgres://localhost/ripple_db", 0, 0).validate().is_err());
    }
}
