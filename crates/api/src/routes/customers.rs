//! Route definitions for customers.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::customers;
use crate::state::AppState;

/// Public sign-up route mounted at `/customers`.
///
/// ```text
/// POST / -> create_customer
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/", post(customers::create_customer))
}

/// Admin customer routes mounted at `/admin/customers`.
///
/// ```text
/// GET    /       -> list_customers (?search, limit, offset)
/// GET    /{id}   -> get_customer
/// PATCH  /{id}   -> update_customer
/// DELETE /{id}   -> delete_customer
/// ```
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/", get(customers::list_customers))
        .route(
            "/{id}",
            get(customers::get_customer)
                .patch(customers::update_customer)
                .delete(customers::delete_customer),
        )
}
