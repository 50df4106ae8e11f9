//! Convenience result type alias for Ripple.

use crate::error::AppError;

/// A specialized `Result` type for Ripple operations.
pub type AppResult<T> = Result<T, AppError>;
