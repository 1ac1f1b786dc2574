//! Postgres-backed [`MenuCatalog`] used by the order pricing engine.

use async_trait::async_trait;
use restaurant_core::error::CoreError;
use restaurant_core::pricing::{CatalogEntry, MenuCatalog};
use restaurant_core::types::DbId;
use sqlx::{FromRow, PgPool};

/// Price lookup over the `menu_items` table.
pub struct PgMenuCatalog<'a> {
    pool: &'a PgPool,
}

impl<'a> PgMenuCatalog<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PriceRow {
    id: DbId,
    price: String,
}

#[async_trait]
impl MenuCatalog for PgMenuCatalog<'_> {
    async fn find_menu_items_by_ids(&self, ids: &[DbId]) -> Result<Vec<CatalogEntry>, CoreError> {
        let rows = sqlx::query_as::<_, PriceRow>(
            "SELECT id, price FROM menu_items WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Menu catalog lookup failed");
            CoreError::Internal(format!("Menu catalog lookup failed: {e}"))
        })?;

        Ok(rows
            .into_iter()
            .map(|row| CatalogEntry {
                id: row.id,
                price_text: row.price,
            })
            .collect())
    }
}
