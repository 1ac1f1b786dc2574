//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthAdmin`] and rejects requests whose role does not
//! meet the requirement with 403 Forbidden.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use restaurant_core::error::CoreError;
use restaurant_core::roles::{is_admin_or_above, ROLE_SUPER_ADMIN};

use super::auth::AuthAdmin;
use crate::error::AppError;
use crate::state::AppState;

/// Requires `SUPER_ADMIN` or `ADMIN`.
///
/// ```ignore
/// async fn catalog_write(RequireAdmin(admin): RequireAdmin) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthAdmin);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = AuthAdmin::from_request_parts(parts, state).await?;
        if !is_admin_or_above(&admin.role) {
            return Err(AppError::Core(CoreError::Forbidden(
                "Forbidden, you do not have permission to perform this action".into(),
            )));
        }
        Ok(RequireAdmin(admin))
    }
}

/// Requires `SUPER_ADMIN`.
pub struct RequireSuperAdmin(pub AuthAdmin);

impl FromRequestParts<AppState> for RequireSuperAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let admin = AuthAdmin::from_request_parts(parts, state).await?;
        if admin.role != ROLE_SUPER_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Forbidden, super admin role required".into(),
            )));
        }
        Ok(RequireSuperAdmin(admin))
    }
}
