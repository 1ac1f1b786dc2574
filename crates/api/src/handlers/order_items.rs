//! Line-item request types and pricing glue shared by both order kinds.

use restaurant_core::pricing::{price_order, CoverageMode, LineItem};
use restaurant_core::types::DbId;
use restaurant_db::catalog::PgMenuCatalog;
use restaurant_db::models::order::OrderContents;
use restaurant_db::DbPool;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;

/// One requested `(menu item, quantity)` pair.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderItemRequest {
    pub menu_item_id: DbId,
    #[validate(
        required(message = "Please provide `quantity`"),
        range(min = 1, message = "`quantity` must be at least 1")
    )]
    pub quantity: Option<i32>,
}

impl From<&OrderItemRequest> for LineItem {
    fn from(item: &OrderItemRequest) -> Self {
        LineItem::new(item.menu_item_id, item.quantity.unwrap_or(0))
    }
}

/// Request body for item updates: `{ "order_items": [...] }`.
#[derive(Debug, Deserialize, Validate)]
pub struct OrderItemsRequest {
    #[serde(default)]
    #[validate(nested)]
    pub order_items: Vec<OrderItemRequest>,
}

/// Price `items` against the live menu and convert the result for storage.
///
/// In [`CoverageMode::Lenient`] unknown menu items are dropped; each drop is
/// logged so the caller does not have to.
pub async fn price_items(
    pool: &DbPool,
    items: &[OrderItemRequest],
    coverage: CoverageMode,
) -> AppResult<OrderContents> {
    let line_items: Vec<LineItem> = items.iter().map(LineItem::from).collect();

    let priced = price_order(&line_items, coverage, &PgMenuCatalog::new(pool)).await?;

    if !priced.unmatched_ids.is_empty() {
        tracing::warn!(
            unmatched_ids = ?priced.unmatched_ids,
            "Dropped order items referencing unknown menu items"
        );
    }

    Ok(OrderContents::from(&priced))
}
