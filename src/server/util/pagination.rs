//! Page and limit handling for list endpoints.

use crate::model::api::PaginationDto;

pub const DEFAULT_LIMIT: u64 = 20;
pub const DEFAULT_SEARCH_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Normalized 1-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    /// Pages below 1 become 1, limits are clamped to `1..=MAX_LIMIT`
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.filter(|p| *p >= 1).map(|p| p as u64).unwrap_or(1),
            limit: clamp_limit(limit, DEFAULT_LIMIT),
        }
    }

    /// Zero-based page index as used by sea-orm paginators
    ///
    /// Capped so that `index * limit` stays a valid SQL offset; pages past
    /// the cap are empty anyway.
    pub fn index(&self) -> u64 {
        (self.page - 1).min(i64::MAX as u64 / self.limit)
    }

    pub fn summary(&self, total: u64) -> PaginationDto {
        PaginationDto {
            page: self.page,
            limit: self.limit,
            total,
            pages: total.div_ceil(self.limit),
        }
    }
}

/// Limit for search endpoints which are not paginated
pub fn search_limit(limit: Option<i64>) -> u64 {
    clamp_limit(limit, DEFAULT_SEARCH_LIMIT)
}

fn clamp_limit(limit: Option<i64>, default: u64) -> u64 {
    limit
        .map(|l| l.clamp(1, MAX_LIMIT as i64) as u64)
        .unwrap_or(default)
}
