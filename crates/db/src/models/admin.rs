//! Admin account model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use restaurant_core::types::{DbId, Timestamp};

/// Full row from the `admins` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`AdminResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe admin representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct AdminResponse {
    pub id: DbId,
    pub email: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            role: admin.role,
            created_at: admin.created_at,
            updated_at: admin.updated_at,
        }
    }
}

/// DTO for creating a new admin.
#[derive(Debug, Deserialize)]
pub struct CreateAdmin {
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
