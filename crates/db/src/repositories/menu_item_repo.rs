//! Repository for the `menu_items` table.

use restaurant_core::types::DbId;
use sqlx::PgPool;

use crate::models::menu_item::{CreateMenuItem, MenuItem, UpdateMenuItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, category_id, created_at, updated_at";

/// Provides CRUD operations for menu items.
pub struct MenuItemRepo;

impl MenuItemRepo {
    /// Insert a new menu item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMenuItem) -> Result<MenuItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO menu_items (name, description, price, category_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.price)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// Find a menu item by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MenuItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_items WHERE id = $1");
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a menu item by name (case-insensitive).
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<MenuItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM menu_items WHERE LOWER(name) = LOWER($1)");
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// List menu items whose name matches the optional `ILIKE` pattern,
    /// optionally restricted to one category.
    pub async fn list(
        pool: &PgPool,
        pattern: Option<&str>,
        category_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<MenuItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM menu_items
             WHERE ($1::TEXT IS NULL OR name ILIKE $1)
               AND ($2::BIGINT IS NULL OR category_id = $2)
             ORDER BY name ASC, id ASC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(pattern)
            .bind(category_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count menu items matching the same filter as [`MenuItemRepo::list`].
    pub async fn count(
        pool: &PgPool,
        pattern: Option<&str>,
        category_id: Option<DbId>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM menu_items
             WHERE ($1::TEXT IS NULL OR name ILIKE $1)
               AND ($2::BIGINT IS NULL OR category_id = $2)",
        )
        .bind(pattern)
        .bind(category_id)
        .fetch_one(pool)
        .await
    }

    /// Update a menu item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMenuItem,
    ) -> Result<Option<MenuItem>, sqlx::Error> {
        let query = format!(
            "UPDATE menu_items SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                price = COALESCE($4, price),
                category_id = COALESCE($5, category_id)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.price)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a menu item, returning the deleted row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<MenuItem>, sqlx::Error> {
        let query = format!("DELETE FROM menu_items WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, MenuItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
