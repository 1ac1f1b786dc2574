//! In-store and online order models and DTOs.
//!
//! Both order kinds store the deduplicated menu item ids together with a
//! parallel array of quantities.

use restaurant_core::pricing::PricedOrder;
use restaurant_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::{OrderStatus, PaymentStatus};

/// A row from the `store_orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StoreOrder {
    pub id: DbId,
    pub order_number: i32,
    pub menu_item_ids: Vec<DbId>,
    pub item_quantities: Vec<i32>,
    pub total_price: Decimal,
    pub total_items: i32,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `online_orders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OnlineOrder {
    pub id: DbId,
    pub customer_id: DbId,
    pub menu_item_ids: Vec<DbId>,
    pub item_quantities: Vec<i32>,
    pub total_price: Decimal,
    pub total_items: i32,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Priced contents shared by every order insert and item update.
#[derive(Debug, Clone)]
pub struct OrderContents {
    pub menu_item_ids: Vec<DbId>,
    pub item_quantities: Vec<i32>,
    pub total_price: Decimal,
    pub total_items: i32,
}

impl From<&PricedOrder> for OrderContents {
    fn from(priced: &PricedOrder) -> Self {
        Self {
            menu_item_ids: priced.menu_item_ids.clone(),
            item_quantities: priced.line_items.iter().map(|i| i.quantity).collect(),
            total_price: priced.total_price,
            total_items: priced.total_items,
        }
    }
}

/// DTO for inserting an in-store order.
#[derive(Debug, Clone)]
pub struct CreateStoreOrder {
    pub order_number: i32,
    pub contents: OrderContents,
}

/// DTO for inserting an online order.
#[derive(Debug, Clone)]
pub struct CreateOnlineOrder {
    pub customer_id: DbId,
    pub contents: OrderContents,
}

/// DTO for changing an order's fulfilment and payment state together.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpdateOrderStatus {
    pub order_status: OrderStatus,
    pub payment_status: PaymentStatus,
}
