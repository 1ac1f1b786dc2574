//! Handlers for online orders placed by customers.
//!
//! Placing an order is public; management under `/admin/online-orders`
//! requires a signed-in admin, and deletion `SUPER_ADMIN` or `ADMIN`.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use restaurant_core::error::CoreError;
use restaurant_core::pricing::CoverageMode;
use restaurant_core::types::DbId;
use restaurant_db::models::customer::Customer;
use restaurant_db::models::order::{CreateOnlineOrder, OnlineOrder, UpdateOrderStatus};
use restaurant_db::repositories::{CustomerRepo, OnlineOrderRepo};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::order_items::{price_items, OrderItemRequest, OrderItemsRequest};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::middleware::rbac::RequireAdmin;
use crate::query::OnlineOrderListParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;
use crate::validation::validate_body;

const ENTITY: &str = "Online order";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /online-orders`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOnlineOrderRequest {
    pub customer_id: DbId,
    #[serde(default)]
    #[validate(nested)]
    pub order_items: Vec<OrderItemRequest>,
}

/// An online order together with the customer who placed it.
///
/// `customer` is `None` only if the row vanished between the two reads.
#[derive(Debug, Serialize)]
pub struct OnlineOrderWithCustomer {
    #[serde(flatten)]
    pub order: OnlineOrder,
    pub customer: Option<Customer>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/online-orders
///
/// The customer must exist and every menu item must exist.
pub async fn create_online_order(
    State(state): State<AppState>,
    Json(input): Json<CreateOnlineOrderRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<OnlineOrderWithCustomer>>)> {
    validate_body(&input)?;

    let customer = CustomerRepo::find_by_id(&state.pool, input.customer_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Customer",
            id: input.customer_id,
        }))?;

    let contents = price_items(&state.pool, &input.order_items, CoverageMode::Strict).await?;

    let order = OnlineOrderRepo::create(
        &state.pool,
        &CreateOnlineOrder {
            customer_id: customer.id,
            contents,
        },
    )
    .await?;

    tracing::info!(
        order_id = order.id,
        customer_id = customer.id,
        total_price = %order.total_price,
        "Online order created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(OnlineOrderWithCustomer {
            order,
            customer: Some(customer),
        })),
    ))
}

/// GET /api/v1/admin/online-orders
///
/// Supports `?customer_id=`, `?limit=` and `?offset=`.
pub async fn list_online_orders(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Query(params): Query<OnlineOrderListParams>,
) -> AppResult<Json<PageResponse<OnlineOrderWithCustomer>>> {
    let (limit, offset) = (params.limit(), params.offset());

    let orders = OnlineOrderRepo::list(&state.pool, params.customer_id, limit, offset).await?;
    let total = OnlineOrderRepo::count(&state.pool, params.customer_id).await?;

    // Fetch every referenced customer in one query to avoid N+1.
    let mut customer_ids: Vec<DbId> = orders.iter().map(|o| o.customer_id).collect();
    customer_ids.sort_unstable();
    customer_ids.dedup();
    let customers: HashMap<DbId, Customer> =
        CustomerRepo::find_by_ids(&state.pool, &customer_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

    let data = orders
        .into_iter()
        .map(|order| OnlineOrderWithCustomer {
            customer: customers.get(&order.customer_id).cloned(),
            order,
        })
        .collect();

    Ok(Json(PageResponse::new(data, limit, offset, total)))
}

/// GET /api/v1/admin/online-orders/{id}
pub async fn get_online_order(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<OnlineOrderWithCustomer>>> {
    let order = OnlineOrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    Ok(Json(DataResponse::new(with_customer(&state, order).await?)))
}

/// PATCH /api/v1/admin/online-orders/{id}
///
/// Replace the order's items and recompute its totals from scratch. Items
/// referencing unknown menu items are dropped.
pub async fn update_online_order_items(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<OrderItemsRequest>,
) -> AppResult<Json<DataResponse<OnlineOrderWithCustomer>>> {
    validate_body(&input)?;
    let contents = price_items(&state.pool, &input.order_items, CoverageMode::Lenient).await?;

    let order = OnlineOrderRepo::update_items(&state.pool, id, &contents)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    Ok(Json(DataResponse::new(with_customer(&state, order).await?)))
}

/// PATCH /api/v1/admin/online-orders/{id}/status
pub async fn update_online_order_status(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrderStatus>,
) -> AppResult<Json<DataResponse<OnlineOrderWithCustomer>>> {
    let order = OnlineOrderRepo::update_status(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    tracing::info!(
        order_id = id,
        order_status = ?order.order_status,
        payment_status = ?order.payment_status,
        "Online order status updated"
    );

    Ok(Json(DataResponse::new(with_customer(&state, order).await?)))
}

/// DELETE /api/v1/admin/online-orders/{id}
pub async fn delete_online_order(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<OnlineOrder>>> {
    let order = OnlineOrderRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    tracing::info!(order_id = id, deleted_by = admin.admin_id, "Online order deleted");

    Ok(Json(DataResponse::new(order)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn with_customer(state: &AppState, order: OnlineOrder) -> AppResult<OnlineOrderWithCustomer> {
    let customer = CustomerRepo::find_by_id(&state.pool, order.customer_id).await?;
    Ok(OnlineOrderWithCustomer { order, customer })
}
