use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ecart_core::ProductName;

/// Stock level given to newly registered products.
///
/// Registration is a two-step affair at the call sites: [`crate::Catalog::register`]
/// creates the entry with this count, then the caller usually overwrites it
/// with [`crate::Catalog::set_count`].
pub const DEFAULT_COUNT: i64 = 10;

/// One product's canonical record: price, stock, discount, availability.
///
/// A flat value record with no internal invariant enforcement.
/// `available == (count > 0)` is the intended steady state, but callers may
/// set the two fields independently and inconsistently; the record passes
/// that through rather than correcting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: ProductName,
    pub unit_price: Decimal,
    pub available: bool,
    /// Units in stock. Checkout decrements this; admin edits overwrite it.
    pub count: i64,
    /// Advertised discount percentage, expected in [0, 100] (not validated).
    pub discount_percent: Decimal,
}

impl Product {
    pub fn new(
        name: ProductName,
        unit_price: Decimal,
        available: bool,
        discount_percent: Decimal,
    ) -> Self {
        Self {
            name,
            unit_price,
            available,
            count: DEFAULT_COUNT,
            discount_percent,
        }
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} - ${} - Available: {} - Count: {} - Discount: {}%",
            self.name, self.unit_price, self.available, self.count, self.discount_percent
        )
    }
}
