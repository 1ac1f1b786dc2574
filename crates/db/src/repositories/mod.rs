//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod category_repo;
pub mod customer_repo;
pub mod menu_item_repo;
pub mod online_order_repo;
pub mod store_order_repo;

pub use admin_repo::AdminRepo;
pub use category_repo::CategoryRepo;
pub use customer_repo::CustomerRepo;
pub use menu_item_repo::MenuItemRepo;
pub use online_order_repo::OnlineOrderRepo;
pub use store_order_repo::StoreOrderRepo;
