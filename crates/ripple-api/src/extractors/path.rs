//! Typed path parameter helpers.

use uuid::Uuid;

use ripple_core::error::AppError;

/// Parses a record id from a path segment. An unparsable id cannot name an
/// existing record, so it reports `not_found` with the caller's message.
pub fn parse_uuid(s: &str, not_found: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::not_found(not_found))
}
