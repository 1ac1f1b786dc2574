//! Shared query parameter types for API handlers.

use restaurant_core::search::{clamp_limit, clamp_offset, ilike_pattern, DEFAULT_LIMIT, MAX_LIMIT};
use restaurant_core::types::DbId;
use serde::Deserialize;

/// Search and pagination parameters (`?search=&limit=&offset=`).
///
/// Used by every list endpoint. Out-of-range values are clamped rather than
/// rejected.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListParams {
    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_LIMIT, MAX_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        clamp_offset(self.offset)
    }

    /// Escaped `ILIKE` pattern for the search term, or `None` when absent.
    pub fn pattern(&self) -> Option<String> {
        ilike_pattern(self.search.as_deref())
    }
}

/// Plain pagination parameters (`?limit=&offset=`) for unsearchable lists.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationParams {
    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_LIMIT, MAX_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        clamp_offset(self.offset)
    }
}

/// Query parameters for `GET /menu`: [`ListParams`] plus a category filter.
///
/// The fields are repeated rather than `#[serde(flatten)]`ed because
/// flattened numeric fields do not deserialize from query strings.
#[derive(Debug, Default, Deserialize)]
pub struct MenuListParams {
    pub search: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub category_id: Option<DbId>,
}

impl MenuListParams {
    pub fn list(&self) -> ListParams {
        ListParams {
            search: self.search.clone(),
            limit: self.limit,
            offset: self.offset,
        }
    }
}

/// Query parameters for `GET /admin/online-orders`.
#[derive(Debug, Default, Deserialize)]
pub struct OnlineOrderListParams {
    pub customer_id: Option<DbId>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl OnlineOrderListParams {
    pub fn limit(&self) -> i64 {
        clamp_limit(self.limit, DEFAULT_LIMIT, MAX_LIMIT)
    }

    pub fn offset(&self) -> i64 {
        clamp_offset(self.offset)
    }
}
