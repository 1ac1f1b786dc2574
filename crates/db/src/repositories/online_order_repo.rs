//! Repository for the `online_orders` table.

use restaurant_core::types::DbId;
use sqlx::PgPool;

use crate::models::order::{CreateOnlineOrder, OnlineOrder, OrderContents, UpdateOrderStatus};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, customer_id, menu_item_ids, item_quantities, total_price, total_items, \
    payment_status, order_status, created_at, updated_at";

/// Provides CRUD operations for customer-placed online orders.
pub struct OnlineOrderRepo;

impl OnlineOrderRepo {
    /// Insert a priced order for an existing customer.
    pub async fn create(
        pool: &PgPool,
        input: &CreateOnlineOrder,
    ) -> Result<OnlineOrder, sqlx::Error> {
        let query = format!(
            "INSERT INTO online_orders
                (customer_id, menu_item_ids, item_quantities, total_price, total_items)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OnlineOrder>(&query)
            .bind(input.customer_id)
            .bind(&input.contents.menu_item_ids)
            .bind(&input.contents.item_quantities)
            .bind(input.contents.total_price)
            .bind(input.contents.total_items)
            .fetch_one(pool)
            .await
    }

    /// Find an order by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<OnlineOrder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM online_orders WHERE id = $1");
        sqlx::query_as::<_, OnlineOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List orders, newest first, optionally restricted to one customer.
    pub async fn list(
        pool: &PgPool,
        customer_id: Option<DbId>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<OnlineOrder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM online_orders
             WHERE ($1::BIGINT IS NULL OR customer_id = $1)
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, OnlineOrder>(&query)
            .bind(customer_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count orders matching the same filter as [`OnlineOrderRepo::list`].
    pub async fn count(pool: &PgPool, customer_id: Option<DbId>) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM online_orders WHERE ($1::BIGINT IS NULL OR customer_id = $1)",
        )
        .bind(customer_id)
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
    ) -> Result<Option<OnlineOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE online_orders SET
                menu_item_ids = $2,
                item_quantities = $3,
                total_price = $4,
                total_items = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OnlineOrder>(&query)
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
    ) -> Result<Option<OnlineOrder>, sqlx::Error> {
        let query = format!(
            "UPDATE online_orders SET order_status = $2, payment_status = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OnlineOrder>(&query)
            .bind(id)
            .bind(input.order_status)
            .bind(input.payment_status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an order, returning the deleted row if it existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<OnlineOrder>, sqlx::Error> {
        let query = format!("DELETE FROM online_orders WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, OnlineOrder>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
