//! Route definitions for online orders.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::online_orders;
use crate::state::AppState;

/// Public order placement mounted at `/online-orders`.
///
/// ```text
/// POST / -> create_online_order
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", post(online_orders::create_online_order))
}

/// Admin online-order routes mounted at `/admin/online-orders`.
///
/// ```text
/// GET    /              -> list_online_orders (?customer_id, limit, offset)
/// GET    /{id}          -> get_online_order
/// PATCH  /{id}          -> update_online_order_items
/// DELETE /{id}          -> delete_online_order
/// PATCH  /{id}/status   -> update_online_order_status
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(online_orders::list_online_orders))
        .route(
            "/{id}",
            get(online_orders::get_online_order)
                .patch(online_orders::update_online_order_items)
                .delete(online_orders::delete_online_order),
        )
        .route(
            "/{id}/status",
            patch(online_orders::update_online_order_status),
        )
}
