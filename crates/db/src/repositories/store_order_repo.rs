//! Repository for the `store_orders` table.

use restaurant_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::{CreateStoreOrder, OrderContents, StoreOrder, UpdateOrderStatus};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, order_number, menu_item_ids, item_quantities, total_price, total_items, \
    payment_status, order_status, created_at, updated_at";

/// Provides CRUD operations for in-store orders.
pub struct StoreOrderRepo;

impl StoreOrderRepo {
    /// Insert a priced order. Status columns take their defaults
    /// (`UNPAID` / `PROCESSING`).
    pub async fn create(pool: &PgPool, input: &CreateStoreOrder) -> Result<StoreOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO store_orders
                (order_number, menu_item_ids, item_quantities, total_price, total_items)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoreOrder>(&query)
            .bind(input.order_number)
            .bind(&input.contents.menu_item_ids)
            .bind(&input.contents.item_quantities)
            .bind(input.contents.total_price)
            .bind(input.contents.total_items)
            .fetch_one(pool)
            .await
    }

    /// Find an order by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StoreOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM store_orders WHERE id = $1");
        sqlx::query_as::<_, StoreOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find orders carrying `order_number`, newest first.
    ///
    /// Order numbers are random and not unique, so this can return several rows.
    pub async fn find_by_order_number(
        pool: &PgPool,
        order_number: i32,
    ) -> Result<Vec<StoreOrder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM store_orders
             WHERE order_number = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, StoreOrder>(&query)
            .bind(order_number)
            .fetch_all(pool)
            .await
    }

    /// List orders, newest first.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<StoreOrder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM store_orders
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, StoreOrder>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of orders.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM store_orders")
            .fetch_one(pool)
            .await
    }

    /// Replace an order's items and totals with a freshly priced set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_items(
        pool: &PgPool,
        id: DbId,
        contents: &OrderContents,
    ) -> Result<Option<StoreOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE store_orders SET
                menu_item_ids = $2,
                item_quantities = $3,
                total_price = $4,
                total_items = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoreOrder>(&query)
            .bind(id)
            .bind(&contents.menu_item_ids)
            .bind(&contents.item_quantities)
            .bind(contents.total_price)
            .bind(contents.total_items)
            .fetch_optional(pool)
            .await
    }

    /// Set both status columns. Returns `None` if no row with `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        input: &UpdateOrderStatus,
    ) -> Result<Option<StoreOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE store_orders SET order_status = $2, payment_status = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StoreOrder>(&query)
            .bind(id)
            .bind(input.order_status)
            .bind(input.payment_status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an order, returning the deleted row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<StoreOrder>, sqlx::Error> {
        let query = format!("DELETE FROM store_orders WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, StoreOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
