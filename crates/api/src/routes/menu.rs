//! Route definitions for menu items.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::menu;
use crate::state::AppState;

/// Public menu routes mounted at `/menu`.
///
/// ```text
/// GET /      -> list_menu_items (?search, category_id, limit, offset)
/// GET /{id}  -> get_menu_item
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::list_menu_items))
        .route("/{id}", get(menu::get_menu_item))
}

/// Admin menu routes mounted at `/admin/menu`.
///
/// ```text
/// POST   /       -> create_menu_item
/// PATCH  /{id}   -> update_menu_item
/// DELETE /{id}   -> delete_menu_item
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", post(menu::create_menu_item))
        .route(
            "/{id}",
            patch(menu::update_menu_item).delete(menu::delete_menu_item),
        )
}
