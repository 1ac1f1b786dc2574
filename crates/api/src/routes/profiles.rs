//! Route definitions for the `/admin/profiles` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// Routes mounted at `/admin/profiles`.
///
/// All routes require the `SUPER_ADMIN` role (enforced by handler extractors).
///
/// ```text
/// GET    /       -> list_admins (?search, limit, offset)
/// GET    /{id}   -> get_admin
/// PATCH  /{id}   -> update_admin_role
/// DELETE /{id}   -> delete_admin
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(profiles::list_admins)).route(
        "/{id}",
        get(profiles::get_admin)
            .patch(profiles::update_admin_role)
            .delete(profiles::delete_admin),
    )
}
