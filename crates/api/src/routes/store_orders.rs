//! Route definitions for in-store orders.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::store_orders;
use crate::state::AppState;

/// Routes mounted at `/admin/store-orders`.
///
/// ```text
/// GET    /                        -> list_store_orders (?limit, offset)
/// POST   /                        -> create_store_order
/// GET    /number/{order_number}   -> get_store_orders_by_number
/// GET    /{id}                    -> get_store_order
/// PATCH  /{id}                    -> update_store_order_items
/// DELETE /{id}                    -> delete_store_order
/// PATCH  /{id}/status             -> update_store_order_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(store_orders::list_store_orders).post(store_orders::create_store_order),
        )
        .route(
            "/number/{order_number}",
            get(store_orders::get_store_orders_by_number),
        )
        .route(
            "/{id}",
            get(store_orders::get_store_order)
                .patch(store_orders::update_store_order_items)
                .delete(store_orders::delete_store_order),
        )
        .route("/{id}/status", patch(store_orders::update_store_order_status))
}
