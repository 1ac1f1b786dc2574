//! Shared response envelope types for API handlers.
//!
//! Every successful response is `{ "success": true, "data": ... }`; list
//! endpoints add a `pagination` object. Errors use the matching
//! `{ "success": false, ... }` shape produced by [`crate::error::AppError`].

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new(item)))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Page window echoed back with list responses.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    pub limit: i64,
    pub offset: i64,
    /// Rows matching the filter, ignoring `limit`/`offset`.
    pub total_count: i64,
}

/// `{ "success": true, "data": [T], "pagination": {...} }` envelope.
#[derive(Debug, Serialize)]
pub struct PageResponse<T: Serialize> {
    pub success: bool,
    pub data: Vec<T>,
    pub pagination: Pagination,
}

impl<T: Serialize> PageResponse<T> {
    pub fn new(data: Vec<T>, limit: i64, offset: i64, total_count: i64) -> Self {
        Self {
            success: true,
            data,
            pagination: Pagination {
                limit,
                offset,
                total_count,
            },
        }
    }
}
