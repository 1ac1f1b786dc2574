//! Route definitions for the `/admin/auth` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/admin/auth`.
///
/// ```text
/// POST /register       -> register
/// POST /login          -> login
/// POST /refresh-token  -> refresh_token (x-access-token, x-refresh-token headers)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/refresh-token", post(auth::refresh_token))
}
