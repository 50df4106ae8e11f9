//! Custom Axum extractors.

pub mod auth;
pub mod json;
pub mod pagination;
pub mod path;

pub use auth::{AuthUser, CurrentUser};
pub use json::ValidatedJson;
pub use pagination::Pagination;
pub use path::parse_uuid;
