pub mod auth;
pub mod categories;
pub mod customers;
pub mod health;
pub mod menu;
pub mod online_orders;
pub mod profiles;
pub mod store_orders;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /admin/auth/register                          register (public)
/// /admin/auth/login                             login (public)
/// /admin/auth/refresh-token                     refresh access token (public)
///
/// /admin/profiles                               list (super admin)
/// /admin/profiles/{id}                          get, change role, delete
///
/// /categories                                   list (public)
/// /categories/{id}                              get (public)
/// /admin/categories                             create (admin)
/// /admin/categories/ids                         all ids (admin)
/// /admin/categories/{id}                        update, delete (admin)
///
/// /menu                                         list (public)
/// /menu/{id}                                    get (public)
/// /admin/menu                                   create (admin)
/// /admin/menu/{id}                              update, delete (admin)
///
/// /customers                                    sign up (public)
/// /admin/customers                              list (admin)
/// /admin/customers/{id}                         get, update, delete (admin)
///
/// /admin/store-orders                           list, create (any admin role)
/// /admin/store-orders/{id}                      get, replace items, delete
/// /admin/store-orders/{id}/status               set status
/// /admin/store-orders/number/{order_number}     find by order number
///
/// /online-orders                                place order (public)
/// /admin/online-orders                          list (any admin role)
/// /admin/online-orders/{id}                     get, replace items, delete
/// /admin/online-orders/{id}/status              set status
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Admin authentication.
        .nest("/admin/auth", auth::router())
        // Admin account management.
        .nest("/admin/profiles", profiles::router())
        // Catalog: public reads, admin writes.
        .nest("/categories", categories::public_router())
        .nest("/admin/categories", categories::admin_router())
        .nest("/menu", menu::public_router())
        .nest("/admin/menu", menu::admin_router())
        // Customers.
        .nest("/customers", customers::public_router())
        .nest("/admin/customers", customers::admin_router())
        // Orders.
        .nest("/admin/store-orders", store_orders::router())
        .nest("/online-orders", online_orders::public_router())
        .nest("/admin/online-orders", online_orders::admin_router())
}
