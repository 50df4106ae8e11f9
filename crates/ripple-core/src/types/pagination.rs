//! Offset pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Default number of items per page.
const DEFAULT_TAKE: u64 = 20;
/// Maximum number of items per page.
const MAX_TAKE: u64 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of items to skip.
    #[serde(default)]
    pub skip: u64,
    /// Number of items to return.
    #[serde(default = "default_take")]
    pub take: u64,
}

impl PageRequest {
    /// Create a new page request, clamping `take` to `1..=100`.
    pub fn new(skip: u64, take: u64) -> Self {
        Self {
            skip,
            take: take.clamp(1, MAX_TAKE),
        }
    }

    /// The SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        i64::try_from(self.skip).unwrap_or(i64::MAX)
    }

    /// The SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.take.min(MAX_TAKE) as i64
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            take: DEFAULT_TAKE,
        }
    }
}

/// One page of results plus the total count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Total number of items across all pages.
    pub total: u64,
    /// Items skipped before this page.
    pub skip: u64,
    /// Requested page size.
    pub take: u64,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: &PageRequest, total: u64) -> Self {
        Self {
            items,
            total,
            skip: page.skip,
            take: page.take,
        }
    }
}

fn default_take() -> u64 {
    DEFAULT_TAKE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_is_clamped() {
        assert_eq!(PageRequest::new(0, 0).take, 1);
        assert_eq!(PageRequest::new(0, 500).take, MAX_TAKE);
        assert_eq!(PageRequest::new(5, 20).limit(), 20);
    }

    #[test]
    fn test_defaults_from_empty_query() {
        let page: PageRequest = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(page, PageRequest::default());
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 20);
    }

    #[test]
    fn test_response_echoes_page() {
        let page = PageRequest::new(10, 5);
        let response = PageResponse::new(vec![1, 2], &page, 12);
        assert_eq!(response.total, 12);
        assert_eq!(response.skip, 10);
        assert_eq!(response.take, 5);
    }
}
