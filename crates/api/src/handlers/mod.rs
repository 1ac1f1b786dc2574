pub mod auth;
pub mod categories;
pub mod customers;
pub mod menu;
pub mod online_orders;
pub mod order_items;
pub mod profiles;
pub mod store_orders;
