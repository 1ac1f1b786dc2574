//! Order pricing: line-item deduplication, catalog matching and totals.
//!
//! The same computation backs in-store order creation, online order creation
//! and order item updates. Totals are always recomputed from scratch from the
//! submitted line items; there is no incremental adjustment.

use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use async_trait::async_trait;
use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Smallest in-store order number (8 digits).
pub const ORDER_NUMBER_MIN: i32 = 10_000_000;
/// Largest in-store order number (8 digits).
pub const ORDER_NUMBER_MAX: i32 = 99_999_999;

/// Decimal places kept on every monetary total.
pub const PRICE_SCALE: u32 = 2;

/// Largest total a `NUMERIC(10, 2)` order column can hold, in cents.
const MAX_ORDER_TOTAL_CENTS: i64 = 9_999_999_999;

const MENU_ITEM_ENTITY: &str = "Menu item";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A requested `(menu item, quantity)` pair submitted with an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub menu_item_id: DbId,
    pub quantity: i32,
}

impl LineItem {
    pub fn new(menu_item_id: DbId, quantity: i32) -> Self {
        Self {
            menu_item_id,
            quantity,
        }
    }
}

/// Read-only catalog projection of a menu item: just enough to price it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: DbId,
    /// Display-formatted price, e.g. `"$10.00"`.
    pub price_text: String,
}

/// Whether pricing rejects requests referencing ids absent from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoverageMode {
    /// Every requested id must exist, otherwise `NotFoundMany`.
    Strict,
    /// Unknown ids are dropped from the order and reported in
    /// [`PricedOrder::unmatched_ids`].
    Lenient,
}

/// Result of pricing a set of line items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedOrder {
    /// Matched menu item ids in first-seen request order, without duplicates.
    pub menu_item_ids: Vec<DbId>,
    /// Deduplicated, matched line items in the same order as `menu_item_ids`.
    pub line_items: Vec<LineItem>,
    /// Sum of `price * quantity`, rounded to [`PRICE_SCALE`] places.
    pub total_price: Decimal,
    /// Sum of matched quantities.
    pub total_items: i32,
    /// Requested ids that had no catalog entry (only ever non-empty in
    /// [`CoverageMode::Lenient`]).
    pub unmatched_ids: Vec<DbId>,
}

/// Catalog lookup collaborator.
///
/// Implementations must return at most one entry per id and may return fewer
/// entries than requested when ids do not exist.
#[async_trait]
pub trait MenuCatalog: Send + Sync {
    async fn find_menu_items_by_ids(&self, ids: &[DbId]) -> Result<Vec<CatalogEntry>, CoreError>;
}

// ---------------------------------------------------------------------------
// Pure helpers
// ---------------------------------------------------------------------------

/// Merge line items sharing a menu item id into the first occurrence.
///
/// Preserves first-seen order: `[{A,2},{B,1},{A,3}]` becomes `[{A,5},{B,1}]`.
pub fn dedupe_line_items(items: &[LineItem]) -> Result<Vec<LineItem>, CoreError> {
    let mut merged: Vec<LineItem> = Vec::with_capacity(items.len());
    let mut index_by_id: HashMap<DbId, usize> = HashMap::with_capacity(items.len());

    for item in items {
        match index_by_id.get(&item.menu_item_id) {
            Some(&idx) => {
                let existing = &mut merged[idx];
                existing.quantity = existing
                    .quantity
                    .checked_add(item.quantity)
                    .ok_or_else(|| quantity_overflow(item.menu_item_id))?;
            }
            None => {
                index_by_id.insert(item.menu_item_id, merged.len());
                merged.push(*item);
            }
        }
    }

    Ok(merged)
}

/// Parse a display-formatted price by dropping everything that is not an
/// ASCII digit or `.` (`"$10.00"` -> `10.00`, `"$1,234.56"` -> `1234.56`).
///
/// A string that leaves nothing parsable behind is corrupt stored data and is
/// reported as [`CoreError::Internal`].
pub fn parse_price(text: &str) -> Result<Decimal, CoreError> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    Decimal::from_str(&cleaned)
        .map_err(|_| CoreError::Internal(format!("Unparsable menu item price: {text:?}")))
}

/// Round a monetary amount half away from zero to exactly two places.
pub fn round_price(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PRICE_SCALE);
    rounded
}

/// Format a structured price for storage and display (`12.5` -> `"$12.50"`).
pub fn format_price(amount: Decimal) -> String {
    format!("${}", round_price(amount))
}

/// Largest order total that can be stored (`99999999.99`).
pub fn max_order_total() -> Decimal {
    Decimal::new(MAX_ORDER_TOTAL_CENTS, PRICE_SCALE)
}

/// Generate a random 8-digit in-store order number.
///
/// No uniqueness check is made against existing orders; two concurrent orders
/// may receive the same number.
pub fn generate_order_number() -> i32 {
    rand::rng().random_range(ORDER_NUMBER_MIN..=ORDER_NUMBER_MAX)
}

// ---------------------------------------------------------------------------
// Pricing
// ---------------------------------------------------------------------------

/// Price line items against already-fetched catalog entries.
pub fn price_line_items(
    line_items: &[LineItem],
    catalog: &[CatalogEntry],
    coverage: CoverageMode,
) -> Result<PricedOrder, CoreError> {
    ensure_not_empty(line_items)?;
    ensure_positive_quantities(line_items)?;
    let deduped = dedupe_line_items(line_items)?;
    price_deduped(&deduped, catalog, coverage)
}

/// Deduplicate, look up and price line items through a [`MenuCatalog`].
pub async fn price_order<C>(
    line_items: &[LineItem],
    coverage: CoverageMode,
    catalog: &C,
) -> Result<PricedOrder, CoreError>
where
    C: MenuCatalog + ?Sized,
{
    ensure_not_empty(line_items)?;
    ensure_positive_quantities(line_items)?;
    let deduped = dedupe_line_items(line_items)?;

    let ids: Vec<DbId> = deduped.iter().map(|item| item.menu_item_id).collect();
    let entries = catalog.find_menu_items_by_ids(&ids).await?;

    price_deduped(&deduped, &entries, coverage)
}

fn ensure_not_empty(line_items: &[LineItem]) -> Result<(), CoreError> {
    if line_items.is_empty() {
        return Err(CoreError::Validation(
            "`order_items` must be an array with at least one item".into(),
        ));
    }
    Ok(())
}

/// Every submitted line must carry a quantity of at least one, including
/// lines that would later be merged or dropped.
fn ensure_positive_quantities(line_items: &[LineItem]) -> Result<(), CoreError> {
    match line_items.iter().find(|item| item.quantity <= 0) {
        None => Ok(()),
        Some(item) if item.quantity == 0 => {
            Err(CoreError::Validation("Please provide `quantity`".into()))
        }
        Some(_) => Err(CoreError::Validation("`quantity` must be at least 1".into())),
    }
}

fn price_deduped(
    deduped: &[LineItem],
    catalog: &[CatalogEntry],
    coverage: CoverageMode,
) -> Result<PricedOrder, CoreError> {
    let requested: HashSet<DbId> = deduped.iter().map(|item| item.menu_item_id).collect();
    let prices: HashMap<DbId, &str> = catalog
        .iter()
        .filter(|entry| requested.contains(&entry.id))
        .map(|entry| (entry.id, entry.price_text.as_str()))
        .collect();

    if prices.is_empty() {
        return Err(CoreError::NoMatches {
            entity: MENU_ITEM_ENTITY,
        });
    }

    let unmatched_ids: Vec<DbId> = deduped
        .iter()
        .map(|item| item.menu_item_id)
        .filter(|id| !prices.contains_key(id))
        .collect();

    if coverage == CoverageMode::Strict && !unmatched_ids.is_empty() {
        return Err(CoreError::NotFoundMany {
            entity: MENU_ITEM_ENTITY,
            ids: unmatched_ids,
        });
    }

    let mut total = Decimal::ZERO;
    let mut total_items: i32 = 0;
    let mut matched = Vec::with_capacity(prices.len());

    for item in deduped {
        let Some(price_text) = prices.get(&item.menu_item_id) else {
            continue;
        };

        let price = parse_price(price_text)?;
        let line_total = price
            .checked_mul(Decimal::from(item.quantity))
            .ok_or_else(|| quantity_overflow(item.menu_item_id))?;
        total = total
            .checked_add(line_total)
            .ok_or_else(|| quantity_overflow(item.menu_item_id))?;
        total_items = total_items
            .checked_add(item.quantity)
            .ok_or_else(|| quantity_overflow(item.menu_item_id))?;

        matched.push(*item);
    }

    let total_price = round_price(total);
    if total_price > max_order_total() {
        return Err(CoreError::Validation(format!(
            "Order total must not exceed {}",
            max_order_total()
        )));
    }

    Ok(PricedOrder {
        menu_item_ids: matched.iter().map(|item| item.menu_item_id).collect(),
        line_items: matched,
        total_price,
        total_items,
        unmatched_ids,
    })
}

fn quantity_overflow(menu_item_id: DbId) -> CoreError {
    CoreError::Validation(format!(
        "Quantity for menu item {menu_item_id} is too large"
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
