//! The error type shared by every Ripple crate.
//!
//! Repositories, the auth layer, and handlers all return [`AppError`], so a
//! failure deep in a query surfaces at the HTTP edge through `?` alone. The
//! API crate owns the mapping from [`ErrorKind`] to status codes.

use std::fmt;
use thiserror::Error;

/// What went wrong, at the granularity clients and logs care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No account, experience, video, or follow edge matches.
    NotFound,
    /// Missing or unusable credential: bad password, bad or expired token.
    Authentication,
    /// The caller is known but does not own the target record.
    Authorization,
    /// The request body or parameters are unacceptable.
    Validation,
    /// A handle, email, phone, or follow edge already exists.
    Conflict,
    /// A bug or an unexpected failure in a dependency.
    Internal,
    /// PostgreSQL rejected or failed a query.
    Database,
    /// Startup settings are missing or inconsistent.
    Configuration,
}

impl ErrorKind {
    /// Upper-case label used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Authentication => "AUTHENTICATION",
            Self::Authorization => "AUTHORIZATION",
            Self::Validation => "VALIDATION",
            Self::Conflict => "CONFLICT",
            Self::Internal => "INTERNAL",
            Self::Database => "DATABASE",
            Self::Configuration => "CONFIGURATION",
        }
    }

    /// Whether the message is safe to show to the client.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Internal | Self::Database | Self::Configuration)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorized failure with a message and an optional cause.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// Category, which decides the HTTP status.
    pub kind: ErrorKind,
    /// Text for the client (for client errors) or the log.
    pub message: String,
    /// Underlying library error, kept for logging.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Error of `kind` without a cause.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Error of `kind` wrapping the library error that caused it.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }
}

/// The cause is not cloneable and is dropped.
impl Clone for AppError {
    fn clone(&self) -> Self {
        Self::new(self.kind, self.message.clone())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Invalid configuration: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = AppError::not_found("Experience not found");
        assert_eq!(err.to_string(), "NOT_FOUND: Experience not found");
    }

    #[test]
    fn test_clone_drops_source() {
        let io = std::io::Error::other("disk");
        let err = AppError::with_source(ErrorKind::Internal, "boom", io);
        let cloned = err.clone();
        assert_eq!(cloned.kind, ErrorKind::Internal);
        assert!(cloned.source.is_none());
    }

    #[test]
    fn test_client_errors() {
        assert!(ErrorKind::Conflict.is_client_error());
        assert!(ErrorKind::Authentication.is_client_error());
        assert!(!ErrorKind::Database.is_client_error());
        assert!(!ErrorKind::Configuration.is_client_error());
    }
}
