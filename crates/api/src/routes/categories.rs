//! Route definitions for menu categories.
//!
//! - `public_router()` mounted at `/categories`
//! - `admin_router()` mounted at `/admin/categories`

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Public category routes mounted at `/categories`.
///
/// ```text
/// GET /      -> list_categories (?search, limit, offset)
/// GET /{id}  -> get_category
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(categories::list_categories))
        .route("/{id}", get(categories::get_category))
}

/// Admin category routes mounted at `/admin/categories`.
///
/// ```text
/// POST   /       -> create_category
/// GET    /ids    -> list_category_ids
/// PATCH  /{id}   -> update_category
/// DELETE /{id}   -> delete_category
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(categories::create_category))
        .route("/ids", get(categories::list_category_ids))
        .route(
            "/{id}",
            patch(categories::update_category).delete(categories::delete_category),
        )
}
