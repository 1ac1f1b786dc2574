//! Access-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use restaurant_core::error::CoreError;
use restaurant_core::types::DbId;
use restaurant_db::repositories::AdminRepo;

use crate::auth::jwt::{authenticate_access_token, now_millis};
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Authenticated admin extracted from a Bearer access token.
///
/// The token must be a currently valid access token and its subject must
/// still exist in the `admins` table; the role is read from the database, so
/// role changes take effect without re-issuing tokens.
///
/// ```ignore
/// async fn my_handler(admin: AuthAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = admin.admin_id, role = %admin.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub admin_id: DbId,
    pub email: String,
    pub role: String,
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;

        let admin_id = authenticate_access_token(token, &state.config.tokens, now_millis())?;

        let admin = AdminRepo::find_by_id(&state.pool, admin_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Unauthorized, cannot use this token".into(),
                ))
            })?;

        Ok(AuthAdmin {
            admin_id: admin.id,
            email: admin.email,
            role: admin.role,
        })
    }
}

fn bearer_token(parts: &Parts) -> AppResult<&str> {
    let header = parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Unauthorized, no token provided".into(),
            ))
        })?;

    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })
}
