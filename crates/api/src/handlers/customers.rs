//! Handlers for customers.
//!
//! Sign-up (`POST /customers`) is public; everything under
//! `/admin/customers` requires `SUPER_ADMIN` or `ADMIN`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use restaurant_core::error::CoreError;
use restaurant_core::phone::normalize_phone;
use restaurant_core::types::DbId;
use restaurant_db::models::customer::{CreateCustomer, Customer, UpdateCustomer};
use restaurant_db::repositories::CustomerRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ListParams;
use crate::response::{DataResponse, PageResponse};
use crate::state::AppState;
use crate::validation::validate_body;

const ENTITY: &str = "Customer";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /customers`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters long"))]
    pub name: String,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    pub phone: String,
}

/// Request body for `PATCH /admin/customers/{id}`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters long"))]
    pub name: Option<String>,
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: Option<String>,
    pub phone: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/customers
///
/// Public sign-up. The phone number is normalized to `(555) 555-5555`.
pub async fn create_customer(
    State(state): State<AppState>,
    Json(input): Json<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Customer>>)> {
    validate_body(&input)?;
    let phone = normalize_phone(&input.phone)?;
    ensure_email_available(&state, &input.email, None).await?;

    let customer = CustomerRepo::create(
        &state.pool,
        &CreateCustomer {
            name: input.name.trim().to_string(),
            email: input.email,
            phone,
        },
    )
    .await?;

    tracing::info!(customer_id = customer.id, "Customer created");

    Ok((StatusCode::CREATED, Json(DataResponse::new(customer))))
}

/// GET /api/v1/admin/customers
///
/// `?search=` matches name or email.
pub async fn list_customers(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PageResponse<Customer>>> {
    let (limit, offset) = (params.limit(), params.offset());
    let pattern = params.pattern();

    let customers = CustomerRepo::list(&state.pool, pattern.as_deref(), limit, offset).await?;
    let total = CustomerRepo::count(&state.pool, pattern.as_deref()).await?;

    Ok(Json(PageResponse::new(customers, limit, offset, total)))
}

/// GET /api/v1/admin/customers/{id}
pub async fn get_customer(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Customer>>> {
    let customer = CustomerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    Ok(Json(DataResponse::new(customer)))
}

/// PATCH /api/v1/admin/customers/{id}
pub async fn update_customer(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCustomerRequest>,
) -> AppResult<Json<DataResponse<Customer>>> {
    validate_body(&input)?;
    let phone = input.phone.as_deref().map(normalize_phone).transpose()?;
    if let Some(email) = &input.email {
        ensure_email_available(&state, email, Some(id)).await?;
    }

    let customer = CustomerRepo::update(
        &state.pool,
        id,
        &UpdateCustomer {
            name: input.name.map(|n| n.trim().to_string()),
            email: input.email,
            phone,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    Ok(Json(DataResponse::new(customer)))
}

/// DELETE /api/v1/admin/customers/{id}
///
/// Rejected with 400 `CONFLICT` while online orders reference the customer.
pub async fn delete_customer(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Customer>>> {
    let customer = CustomerRepo::delete(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: ENTITY, id }))?;

    tracing::info!(customer_id = id, deleted_by = admin.admin_id, "Customer deleted");

    Ok(Json(DataResponse::new(customer)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject an email already used by a different customer.
async fn ensure_email_available(
    state: &AppState,
    email: &str,
    current_id: Option<DbId>,
) -> AppResult<()> {
    match CustomerRepo::find_by_email(&state.pool, email).await? {
        Some(existing) if Some(existing.id) != current_id => Err(AppError::Core(
            CoreError::Conflict(format!("Customer with email '{email}' already exists")),
        )),
        _ => Ok(()),
    }
}
