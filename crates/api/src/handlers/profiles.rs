//! Handlers for the `/admin/profiles` resource (admin account management).
//!
//! All handlers require the `SUPER_ADMIN` role via [`RequireSuperAdmin`].

use axum::extract::{Path, Query, State};
use axum::Json;
use restaurant_core::error::CoreError;
use restaurant_core::roles::normalize_role;
use restaurant_core::types::DbId;
use restaurant_db::models::admin::AdminResponse;
use restaurant_db::repositories::AdminRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireSuperAdmin;
use crate::query::ListParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;

/// Request body for `PATCH /admin/profiles/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}

/// GET /api/v1/admin/profiles
///
/// List admins, optionally filtered by an email search term.
pub async fn list_admins(
    State(state): State<AppState>,
    RequireSuperAdmin(_admin): RequireSuperAdmin,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PageResponse<AdminResponse>>> {
    let (limit, offset) = (params.limit(), params.offset());
    let pattern = params.pattern();

    let admins = AdminRepo::list(&state.pool, pattern.as_deref(), limit, offset).await?;
    let total = AdminRepo::count(&state.pool, pattern.as_deref()).await?;

    let data = admins.into_iter().map(AdminResponse::from).collect();
    Ok(Json(PageResponse::new(data, limit, offset, total)))
}

/// GET /api/v1/admin/profiles/{id}
pub async fn get_admin(
    State(state): State<AppState>,
    RequireSuperAdmin(_admin): RequireSuperAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<AdminResponse>>> {
    let admin = AdminRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Admin", id }))?;

    Ok(Json(DataResponse::new(admin.into())))
}

/// PATCH /api/v1/admin/profiles/{id}
///
/// Change an admin's role. Any of the four roles may be granted here.
pub async fn update_admin_role(
    State(state): State<AppState>,
    RequireSuperAdmin(actor): RequireSuperAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRoleRequest>,
) -> AppResult<Json<DataResponse<AdminResponse>>> {
    let role = normalize_role(&input.role).ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "Role must be either 'SUPER_ADMIN', 'ADMIN', 'MANAGER', or 'STAFF'".into(),
        ))
    })?;

    let admin = AdminRepo::update_role(&state.pool, id, role)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Admin", id }))?;

    tracing::info!(admin_id = id, role, changed_by = actor.admin_id, "Admin role changed");

    Ok(Json(DataResponse::new(admin.into())))
}

/// DELETE /api/v1/admin/profiles/{id}
///
/// Returns the deleted account.
pub async fn delete_admin(
    State(state): State<AppState>,
    RequireSuperAdmin(actor): RequireSuperAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<AdminResponse>>> {
    let admin = AdminRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Admin", id }))?;

    tracing::info!(admin_id = id, deleted_by = actor.admin_id, "Admin deleted");

    Ok(Json(DataResponse::new(admin.into())))
}
