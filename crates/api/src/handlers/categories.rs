//! Handlers for menu categories.
//!
//! Reads are public; writes require `SUPER_ADMIN` or `ADMIN` via
//! [`RequireAdmin`].

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use restaurant_core::error::CoreError;
use restaurant_core::types::DbId;
use restaurant_db::models::category::{Category, CreateCategory, UpdateCategory};
use restaurant_db::repositories::CategoryRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;
use crate::validation::validate_body;

const ENTITY: &str = "Category";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/categories`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, message = "Please provide `name`"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Request body for `PATCH /admin/categories/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, message = "`name` must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/categories
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PageResponse<Category>>> {
    let (limit, offset) = (params.limit(), params.offset());
    let pattern = params.pattern();

    let categories = CategoryRepo::list(&state.pool, pattern.as_deref(), limit, offset).await?;
    let total = CategoryRepo::count(&state.pool, pattern.as_deref()).await?;

    Ok(Json(PageResponse::new(categories, limit, offset, total)))
}

/// GET /api/v1/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Category>>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    Ok(Json(DataResponse::new(category)))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/categories/ids
///
/// Every category id, for populating menu item forms.
pub async fn list_category_ids(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<DbId>>>> {
    let ids = CategoryRepo::list_ids(&state.pool).await?;
    Ok(Json(DataResponse::new(ids)))
}

/// POST /api/v1/admin/categories
pub async fn create_category(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    validate_body(&input)?;
    let name = input.name.trim().to_string();
    ensure_name_available(&state, &name, None).await?;

    let category = CategoryRepo::create(
        &state.pool,
        &CreateCategory {
            name,
            description: input.description,
        },
    )
    .await?;

    tracing::info!(category_id = category.id, created_by = admin.admin_id, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(category))))
}

/// PATCH /api/v1/admin/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategoryRequest>,
) -> AppResult<Json<DataResponse<Category>>> {
    validate_body(&input)?;
    let name = input.name.map(|n| n.trim().to_string());
    if let Some(name) = &name {
        ensure_name_available(&state, name, Some(id)).await?;
    }

    let category = CategoryRepo::update(
        &state.pool,
        id,
        &UpdateCategory {
            name,
            description: input.description,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    Ok(Json(DataResponse::new(category)))
}

/// DELETE /api/v1/admin/categories/{id}
///
/// Rejected with 400 `CONFLICT` while menu items still belong to the category.
pub async fn delete_category(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Category>>> {
    let category = CategoryRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    tracing::info!(category_id = id, deleted_by = admin.admin_id, "Category deleted");

    Ok(Json(DataResponse::new(category)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject a name already used by a different category.
async fn ensure_name_available(
    state: &AppState,
    name: &str,
    current_id: Option<DbId>,
) -> AppResult<()> {
    match CategoryRepo::find_by_name(&state.pool, name).await? {
        Some(existing) if Some(existing.id) != current_id => Err(AppError::Core(
            CoreError::Conflict(format!("Category '{name}' already exists")),
        )),
        _ => Ok(()),
    }
}
