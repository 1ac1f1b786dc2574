//! Handlers for in-store orders placed by staff.
//!
//! Every handler requires a signed-in admin of any role; deletion requires
//! `SUPER_ADMIN` or `ADMIN`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use restaurant_core::error::CoreError;
use restaurant_core::pricing::{generate_order_number, CoverageMode};
use restaurant_core::types::DbId;
use restaurant_db::models::order::{CreateStoreOrder, StoreOrder, UpdateOrderStatus};
use restaurant_db::repositories::StoreOrderRepo;

use super::order_items::{price_items, OrderItemsRequest};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::middleware::rbac::RequireAdmin;
use crate::query::PaginationParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;
use crate::validation::validate_body;

const ENTITY: &str = "Store order";

/// POST /api/v1/admin/store-orders
///
/// Price the submitted items (every menu item must exist) and store the
/// order under a random 8-digit order number.
pub async fn create_store_order(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Json(input): Json<OrderItemsRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<StoreOrder>>)> {
    validate_body(&input)?;
    let contents = price_items(&state.pool, &input.order_items, CoverageMode::Strict).await?;

    let order = StoreOrderRepo::create(
        &state.pool,
        &CreateStoreOrder {
            order_number: generate_order_number(),
            contents,
        },
    )
    .await?;

    tracing::info!(
        order_id = order.id,
        order_number = order.order_number,
        total_price = %order.total_price,
        created_by = admin.admin_id,
        "Store order created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse::new(order))))
}

/// GET /api/v1/admin/store-orders
pub async fn list_store_orders(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<PageResponse<StoreOrder>>> {
    let (limit, offset) = (params.limit(), params.offset());

    let orders = StoreOrderRepo::list(&state.pool, limit, offset).await?;
    let total = StoreOrderRepo::count(&state.pool).await?;

    Ok(Json(PageResponse::new(orders, limit, offset, total)))
}

/// GET /api/v1/admin/store-orders/{id}
pub async fn get_store_order(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<StoreOrder>>> {
    let order = StoreOrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    Ok(Json(DataResponse::new(order)))
}

/// GET /api/v1/admin/store-orders/number/{order_number}
///
/// Order numbers are not unique, so every match is returned (newest first).
/// An unknown number is a 404.
pub async fn get_store_orders_by_number(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(order_number): Path<i32>,
) -> AppResult<Json<DataResponse<Vec<StoreOrder>>>> {
    let orders = StoreOrderRepo::find_by_order_number(&state.pool, order_number).await?;
    if orders.is_empty() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: DbId::from(order_number),
        }));
    }

    Ok(Json(DataResponse::new(orders)))
}

/// PATCH /api/v1/admin/store-orders/{id}
///
/// Replace the order's items and recompute its totals from scratch. Items
/// referencing unknown menu items are dropped.
pub async fn update_store_order_items(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<OrderItemsRequest>,
) -> AppResult<Json<DataResponse<StoreOrder>>> {
    validate_body(&input)?;
    let contents = price_items(&state.pool, &input.order_items, CoverageMode::Lenient).await?;

    let order = StoreOrderRepo::update_items(&state.pool, id, &contents)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    Ok(Json(DataResponse::new(order)))
}

/// PATCH /api/v1/admin/store-orders/{id}/status
pub async fn update_store_order_status(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrderStatus>,
) -> AppResult<Json<DataResponse<StoreOrder>>> {
    let order = StoreOrderRepo::update_status(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    tracing::info!(
        order_id = id,
        order_status = ?order.order_status,
        payment_status = ?order.payment_status,
        "Store order status updated"
    );

    Ok(Json(DataResponse::new(order)))
}

/// DELETE /api/v1/admin/store-orders/{id}
pub async fn delete_store_order(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<StoreOrder>>> {
    let order = StoreOrderRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    tracing::info!(order_id = id, deleted_by = admin.admin_id, "Store order deleted");

    Ok(Json(DataResponse::new(order)))
}
