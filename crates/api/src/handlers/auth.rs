//! Handlers for the `/admin/auth` resource (register, login, refresh-token).

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use restaurant_core::error::CoreError;
use restaurant_core::roles::{normalize_role, REGISTERABLE_ROLES};
use restaurant_db::models::admin::{AdminResponse, CreateAdmin};
use restaurant_db::repositories::AdminRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::jwt::{issue_pair, now_millis, refresh_access_token, IssuedToken, TokenPair};
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::validation::validate_body;

/// Header carrying the (possibly expired) access token on refresh.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";
/// Header carrying the refresh token on refresh.
pub const REFRESH_TOKEN_HEADER: &str = "x-refresh-token";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
    pub role: String,
}

/// Request body for `POST /admin/auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please provide a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub admin: AdminResponse,
    #[serde(flatten)]
    pub tokens: TokenPair,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/admin/auth/register
///
/// Create an `ADMIN`, `MANAGER` or `STAFF` account and sign a token pair
/// for it. `SUPER_ADMIN` cannot be self-registered.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<AuthResponse>>)> {
    validate_body(&input)?;

    let role = normalize_role(&input.role)
        .filter(|r| REGISTERABLE_ROLES.contains(r))
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "Role must be either 'ADMIN', 'MANAGER', or 'STAFF'".into(),
            ))
        })?;

    if AdminRepo::find_by_email(&state.pool, &input.email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "'{role}' with email '{}' already exists",
            input.email
        ))));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let admin = AdminRepo::create(
        &state.pool,
        &CreateAdmin {
            email: input.email,
            password_hash,
            role: role.to_string(),
        },
    )
    .await?;

    tracing::info!(admin_id = admin.id, role = %admin.role, "Admin registered");

    let tokens = issue_pair(admin.id, &state.config.tokens, now_millis())
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(AuthResponse {
            admin: admin.into(),
            tokens,
        })),
    ))
}

/// POST /api/v1/admin/auth/login
///
/// Authenticate with email + password. Returns a fresh token pair.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<AuthResponse>>> {
    validate_body(&input)?;

    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid credentials".into()));

    let admin = AdminRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &admin.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        tracing::warn!(admin_id = admin.id, "Failed login attempt");
        return Err(invalid());
    }

    let tokens = issue_pair(admin.id, &state.config.tokens, now_millis())
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(DataResponse::new(AuthResponse {
        admin: admin.into(),
        tokens,
    })))
}

/// POST /api/v1/admin/auth/refresh-token
///
/// Exchange an expired access token (`x-access-token`) plus a valid refresh
/// token (`x-refresh-token`) for a new access token.
pub async fn refresh_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<DataResponse<IssuedToken>>> {
    let issued = refresh_access_token(
        header_str(&headers, ACCESS_TOKEN_HEADER),
        header_str(&headers, REFRESH_TOKEN_HEADER),
        &state.config.tokens,
        now_millis(),
    )?;

    tracing::debug!(admin_id = issued.token_id, "Access token refreshed");

    Ok(Json(DataResponse::new(issued)))
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
