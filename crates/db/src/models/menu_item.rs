//! Menu item model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use restaurant_core::types::{DbId, Timestamp};

/// A row from the `menu_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MenuItem {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Display-formatted price, e.g. `"$10.00"`.
    pub price: String,
    pub category_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a menu item. `price` is already formatted.
#[derive(Debug, Deserialize)]
pub struct CreateMenuItem {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: DbId,
}

/// DTO for updating a menu item. All fields are optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMenuItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category_id: Option<DbId>,
}
