//! Handlers for menu items.
//!
//! Reads are public; writes require `SUPER_ADMIN` or `ADMIN`. Prices arrive
//! as decimal numbers and are stored display-formatted (`"$10.00"`).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use restaurant_core::error::CoreError;
use restaurant_core::pricing::format_price;
use restaurant_core::types::DbId;
use restaurant_db::models::menu_item::{CreateMenuItem, MenuItem, UpdateMenuItem};
use restaurant_db::repositories::{CategoryRepo, MenuItemRepo};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::MenuListParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;
use crate::validation::validate_body;

const ENTITY: &str = "Menu item";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/menu`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMenuItemRequest {
    #[validate(length(min = 1, message = "Please provide `name`"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    pub category_id: DbId,
}

/// Request body for `PATCH /admin/menu/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMenuItemRequest {
    #[validate(length(min = 1, message = "`name` must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Decimal>,
    pub category_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Public handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/menu
///
/// Supports `?search=`, `?category_id=`, `?limit=` and `?offset=`.
pub async fn list_menu_items(
    State(state): State<AppState>,
    Query(params): Query<MenuListParams>,
) -> AppResult<Json<PageResponse<MenuItem>>> {
    let list = params.list();
    let (limit, offset) = (list.limit(), list.offset());
    let pattern = list.pattern();

    let items = MenuItemRepo::list(
        &state.pool,
        pattern.as_deref(),
        params.category_id,
        limit,
        offset,
    )
    .await?;
    let total = MenuItemRepo::count(&state.pool, pattern.as_deref(), params.category_id).await?;

    Ok(Json(PageResponse::new(items, limit, offset, total)))
}

/// GET /api/v1/menu/{id}
pub async fn get_menu_item(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MenuItem>>> {
    let item = MenuItemRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    Ok(Json(DataResponse::new(item)))
}

// ---------------------------------------------------------------------------
// Admin handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/menu
pub async fn create_menu_item(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateMenuItemRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<MenuItem>>)> {
    validate_body(&input)?;
    let price = checked_price(input.price)?;
    let name = input.name.trim().to_string();
    ensure_category_exists(&state, input.category_id).await?;
    ensure_name_available(&state, &name, None).await?;

    let item = MenuItemRepo::create(
        &state.pool,
        &CreateMenuItem {
            name,
            description: input.description,
            price,
            category_id: input.category_id,
        },
    )
    .await?;

    tracing::info!(menu_item_id = item.id, price = %item.price, created_by = admin.admin_id, "Menu item created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(item))))
}

/// PATCH /api/v1/admin/menu/{id}
///
/// Existing orders keep the totals they were priced with; only orders
/// created or item-updated afterwards see the new price.
pub async fn update_menu_item(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMenuItemRequest>,
) -> AppResult<Json<DataResponse<MenuItem>>> {
    validate_body(&input)?;
    let price = input.price.map(checked_price).transpose()?;
    let name = input.name.map(|n| n.trim().to_string());
    if let Some(category_id) = input.category_id {
        ensure_category_exists(&state, category_id).await?;
    }
    if let Some(name) = &name {
        ensure_name_available(&state, name, Some(id)).await?;
    }

    let item = MenuItemRepo::update(
        &state.pool,
        id,
        &UpdateMenuItem {
            name,
            description: input.description,
            price,
            category_id: input.category_id,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    Ok(Json(DataResponse::new(item)))
}

/// DELETE /api/v1/admin/menu/{id}
pub async fn delete_menu_item(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MenuItem>>> {
    let item = MenuItemRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    tracing::info!(menu_item_id = id, deleted_by = admin.admin_id, "Menu item deleted");

    Ok(Json(DataResponse::new(item)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject negative prices and format the rest for storage.
fn checked_price(price: Decimal) -> AppResult<String> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(AppError::Core(CoreError::Validation(
            "`price` must not be negative".into(),
        )));
    }
    Ok(format_price(price))
}

async fn ensure_category_exists(state: &AppState, category_id: DbId) -> AppResult<()> {
    CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .map(|_| ())
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        }))
}

/// Reject a name already used by a different menu item.
async fn ensure_name_available(
    state: &AppState,
    name: &str,
    current_id: Option<DbId>,
) -> AppResult<()> {
    match MenuItemRepo::find_by_name(&state.pool, name).await? {
        Some(existing) if Some(existing.id) != current_id => Err(AppError::Core(
            CoreError::Conflict(format!("Menu item '{name}' already exists")),
        )),
        _ => Ok(()),
    }
}
