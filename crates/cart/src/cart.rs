//! Per-session shopping cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ecart_catalog::Catalog;
use ecart_core::{CartId, DomainError, DomainResult, ProductName};
use ecart_pricing::DiscountPolicy;

use crate::item::CartItem;

/// Ordered collection of cart line items, owned by one shopping session.
///
/// Line items are keyed logically by product name but never deduplicated:
/// adding the same product twice appends two entries rather than merging
/// quantities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    id: CartId,
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::with_id(CartId::new())
    }

    /// Prefer passing the id explicitly in tests for determinism.
    pub fn with_id(id: CartId) -> Self {
        Self {
            id,
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> CartId {
        self.id
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a line item. Same-name items stay as separate entries.
    pub fn add(&mut self, item: CartItem) {
        tracing::info!("added {} {} to the cart", item.quantity, item.name);
        self.items.push(item);
    }

    /// Clone a catalog entry and append it as a new line item.
    pub fn add_from_catalog(
        &mut self,
        catalog: &Catalog,
        name: &ProductName,
        quantity: i64,
        discount: DiscountPolicy,
    ) -> DomainResult<()> {
        let item = CartItem::clone_from(catalog, name, quantity, discount)?;
        self.add(item);
        Ok(())
    }

    /// Set the quantity of the first line item matching `name`.
    ///
    /// The new quantity is taken as given (zero and negative values pass
    /// through unvalidated). A missing name is a warned no-op, not an error.
    pub fn update_quantity(&mut self, name: &ProductName, new_quantity: i64) {
        for item in &mut self.items {
            if item.name == *name {
                item.quantity = new_quantity;
                tracing::info!("updated quantity for {} to {}", name, new_quantity);
                return;
            }
        }
        tracing::warn!("product {} not found in the cart", name);
    }

    /// Remove `name` from the cart.
    ///
    /// With `None`, every matching line item is deleted. With `Some(q)`, each
    /// matching line item (in order) is decremented by `q` and deleted once
    /// its quantity falls to zero or below.
    pub fn remove(&mut self, name: &ProductName, remove_quantity: Option<i64>) {
        match remove_quantity {
            None => {
                self.items.retain(|item| item.name != *name);
                tracing::info!("removed {} from the cart", name);
            }
            Some(quantity) => {
                for item in &mut self.items {
                    if item.name == *name {
                        item.quantity -= quantity;
                    }
                }
                self.items
                    .retain(|item| item.name != *name || item.quantity > 0);
                tracing::info!("removed {} {} from the cart", quantity, name);
            }
        }
    }

    /// Sum of the discounted line totals.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Comma-separated `<quantity> <name>` listing for display.
    pub fn summary(&self) -> String {
        self.items
            .iter()
            .map(|item| format!("{} {}", item.quantity, item.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Reconcile the cart against catalog stock and commit the deductions.
    ///
    /// Line items are processed in order. Each entry with sufficient stock is
    /// decremented immediately, and an entry whose count reaches exactly zero
    /// is marked unavailable. The first shortfall aborts the rest of the pass
    /// with `InsufficientStock`; decrements already applied in the same pass
    /// are NOT rolled back. Items whose product has vanished from the catalog
    /// are skipped with a warning.
    ///
    /// A successful checkout leaves the cart contents in place; clearing is
    /// the caller's call (see [`Cart::clear`]).
    pub fn checkout(&self, catalog: &mut Catalog) -> DomainResult<()> {
        for item in &self.items {
            let Some(entry) = catalog.get_mut(&item.name) else {
                tracing::warn!("product {} is no longer in the catalog; skipping", item.name);
                continue;
            };

            if entry.count < item.quantity {
                tracing::warn!("not enough stock available for {}; checkout failed", item.name);
                return Err(DomainError::insufficient_stock(
                    item.name.as_str(),
                    item.quantity,
                    entry.count,
                ));
            }

            entry.count -= item.quantity;
            if entry.count == 0 {
                entry.available = false;
            }
            tracing::info!(
                "checked out {} {}(s); updated count: {}, availability: {}",
                item.quantity,
                item.name,
                entry.count,
                entry.available
            );
        }

        tracing::info!("purchase successful");
        Ok(())
    }

    /// Drop every line item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}
