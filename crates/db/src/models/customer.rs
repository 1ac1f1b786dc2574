//! Customer model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use restaurant_core::types::{DbId, Timestamp};

/// A row from the `customers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Customer {
    pub id: DbId,
    pub name: String,
    pub email: String,
    /// Normalized to `(555) 555-5555`.
    pub phone: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a customer. `phone` must already be normalized.
#[derive(Debug, Deserialize)]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// DTO for updating a customer. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
