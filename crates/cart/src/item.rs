use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ecart_catalog::Catalog;
use ecart_core::{DomainResult, ProductName};
use ecart_pricing::DiscountPolicy;

/// One entry in a session's cart.
///
/// The unit price is a snapshot copied from the catalog entry at add-time,
/// not a live link: catalog edits after the add do not change items already
/// in the cart. Quantity is positive while the item sits in a cart (removal
/// deletes the entry once it reaches zero), though `Cart::update_quantity`
/// deliberately does not enforce that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub name: ProductName,
    pub unit_price: Decimal,
    pub quantity: i64,
    pub discount: DiscountPolicy,
}

impl CartItem {
    pub fn new(
        name: ProductName,
        unit_price: Decimal,
        quantity: i64,
        discount: DiscountPolicy,
    ) -> Self {
        Self {
            name,
            unit_price,
            quantity,
            discount,
        }
    }

    /// Clone the named catalog entry into a cart-ready line item.
    ///
    /// The entry's name and price are copied; quantity and discount policy
    /// come from the caller, never from the catalog.
    pub fn clone_from(
        catalog: &Catalog,
        name: &ProductName,
        quantity: i64,
        discount: DiscountPolicy,
    ) -> DomainResult<Self> {
        let entry = catalog.snapshot(name)?;
        Ok(Self::new(entry.name, entry.unit_price, quantity, discount))
    }

    /// Discounted subtotal: `discount.apply(unit_price) * quantity`.
    pub fn line_total(&self) -> Decimal {
        self.discount.apply(self.unit_price) * Decimal::from(self.quantity)
    }
}

impl core::fmt::Display for CartItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} - Quantity: {} - Total: ${}",
            self.name,
            self.quantity,
            self.line_total()
        )
    }
}
