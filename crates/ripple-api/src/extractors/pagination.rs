//! Pagination query parameter extractor.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;

use ripple_core::types::PageRequest;

use crate::error::ApiError;

/// `?skip=&take=` query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaginationParams {
    /// Items to skip (default 0).
    pub skip: Option<u64>,
    /// Items per page (default 20, max 100).
    pub take: Option<u64>,
}

impl PaginationParams {
    /// Converts to a clamped `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        let defaults = PageRequest::default();
        PageRequest::new(
            self.skip.unwrap_or(defaults.skip),
            self.take.unwrap_or(defaults.take),
        )
    }
}

/// A normalized page request taken from the query string.
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageRequest);

impl<S: Send + Sync> FromRequestParts<S> for Pagination {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state).await?;
        Ok(Self(params.into_page_request()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_clamp() {
        assert_eq!(PaginationParams::default().into_page_request(), PageRequest::new(0, 20));
        let big = PaginationParams {
            skip: Some(40),
            take: Some(1_000),
        };
        assert_eq!(big.into_page_request(), PageRequest::new(40, 100));
    }
}
