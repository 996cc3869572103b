//! Name-keyed product registry with a single-slot change notifier.

use std::collections::BTreeMap;

use chrono::Utc;
use rust_decimal::Decimal;

use ecart_core::{DomainError, DomainResult, ProductName};
use ecart_events::ChangeNotifier;

use crate::event::{CatalogEvent, ProductRegistered, ProductUpdated};
use crate::product::Product;

/// Mapping from product name to catalog entry.
///
/// Process-lifetime state owned by the application session. Entries are
/// created at load or by the admin flow, mutated by admin edits and checkout
/// decrements, and never deleted. Admin-facing mutations are surfaced to the
/// dependent customer view through the notifier.
#[derive(Debug, Default)]
pub struct Catalog {
    products: BTreeMap<ProductName, Product>,
    notifier: ChangeNotifier<CatalogEvent>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the view subscriber, replacing any previous one.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&CatalogEvent) + 'static) {
        self.notifier.subscribe(subscriber);
    }

    /// Create or overwrite the entry at `name`.
    ///
    /// The count starts at [`crate::DEFAULT_COUNT`]; callers follow up with
    /// [`Catalog::set_count`] when they have an exact figure. Re-registering
    /// a name replaces the entry wholesale, losing the prior count and
    /// availability.
    pub fn register(
        &mut self,
        name: ProductName,
        unit_price: Decimal,
        available: bool,
        discount_percent: Decimal,
    ) {
        let product = Product::new(name.clone(), unit_price, available, discount_percent);
        self.products.insert(name.clone(), product);
        tracing::info!("added new product: {}", name);

        self.notifier
            .notify(&CatalogEvent::ProductRegistered(ProductRegistered {
                name,
                occurred_at: Utc::now(),
            }));
    }

    /// Overwrite the stock count of an existing entry.
    pub fn set_count(&mut self, name: &ProductName, count: i64) -> DomainResult<()> {
        let product = self
            .products
            .get_mut(name)
            .ok_or_else(|| DomainError::not_found(name.as_str()))?;
        product.count = count;
        Ok(())
    }

    /// Admin edit: set availability, count and discount in one pass.
    ///
    /// The fields are taken as given; `available` and `count` may end up
    /// inconsistent (e.g. available with zero stock).
    pub fn update(
        &mut self,
        name: &ProductName,
        available: bool,
        count: i64,
        discount_percent: Decimal,
    ) -> DomainResult<()> {
        let product = self
            .products
            .get_mut(name)
            .ok_or_else(|| DomainError::not_found(name.as_str()))?;
        product.available = available;
        product.count = count;
        product.discount_percent = discount_percent;
        tracing::info!("updated availability for {} to {}", name, available);

        self.notifier
            .notify(&CatalogEvent::ProductUpdated(ProductUpdated {
                name: name.clone(),
                available,
                count,
                discount_percent,
                occurred_at: Utc::now(),
            }));
        Ok(())
    }

    pub fn get(&self, name: &ProductName) -> Option<&Product> {
        self.products.get(name)
    }

    pub fn get_mut(&mut self, name: &ProductName) -> Option<&mut Product> {
        self.products.get_mut(name)
    }

    pub fn contains(&self, name: &ProductName) -> bool {
        self.products.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Entries in name order (stable listing for display).
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Prototype clone: an independent copy of the current entry, decoupled
    /// from future catalog mutations.
    pub fn snapshot(&self, name: &ProductName) -> DomainResult<Product> {
        self.products
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::not_found(name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rust_decimal_macros::dec;

    use ecart_events::Event;

    use crate::product::DEFAULT_COUNT;

    use super::*;

    fn laptop() -> ProductName {
        ProductName::new("Laptop1")
    }

    #[test]
    fn register_defaults_the_count() {
        let mut catalog = Catalog::new();
        catalog.register(laptop(), dec!(800), true, dec!(5));

        assert_eq!(catalog.get(&laptop()).unwrap().count, DEFAULT_COUNT);
    }

    #[test]
    fn set_count_overwrites_the_default() {
        let mut catalog = Catalog::new();
        catalog.register(laptop(), dec!(800), true, dec!(5));
        catalog.set_count(&laptop(), 20).unwrap();

        assert_eq!(catalog.get(&laptop()).unwrap().count, 20);
    }

    #[test]
    fn set_count_on_a_missing_name_is_not_found() {
        let mut catalog = Catalog::new();
        let err = catalog.set_count(&laptop(), 20).unwrap_err();
        assert_eq!(err, DomainError::not_found("Laptop1"));
    }

    #[test]
    fn reregistering_replaces_the_entry_wholesale() {
        let mut catalog = Catalog::new();
        catalog.register(laptop(), dec!(800), true, dec!(5));
        catalog.set_count(&laptop(), 20).unwrap();

        catalog.register(laptop(), dec!(750), false, dec!(0));

        let entry = catalog.get(&laptop()).unwrap();
        assert_eq!(entry.unit_price, dec!(750));
        assert!(!entry.available);
        // Prior count history is gone; the entry is back at the default.
        assert_eq!(entry.count, DEFAULT_COUNT);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn update_sets_the_three_admin_fields_permissively() {
        let mut catalog = Catalog::new();
        catalog.register(laptop(), dec!(800), true, dec!(5));

        // available=true with count=0 is accepted as given.
        catalog.update(&laptop(), true, 0, dec!(12)).unwrap();

        let entry = catalog.get(&laptop()).unwrap();
        assert!(entry.available);
        assert_eq!(entry.count, 0);
        assert_eq!(entry.discount_percent, dec!(12));
    }

    #[test]
    fn update_on_a_missing_name_is_not_found() {
        let mut catalog = Catalog::new();
        let err = catalog.update(&laptop(), true, 5, dec!(0)).unwrap_err();
        assert_eq!(err, DomainError::not_found("Laptop1"));
    }

    #[test]
    fn snapshot_is_decoupled_from_later_edits() {
        let mut catalog = Catalog::new();
        catalog.register(laptop(), dec!(800), true, dec!(5));

        let snapshot = catalog.snapshot(&laptop()).unwrap();
        catalog.update(&laptop(), false, 0, dec!(50)).unwrap();

        assert_eq!(snapshot.unit_price, dec!(800));
        assert!(snapshot.available);
        assert_eq!(snapshot.discount_percent, dec!(5));
    }

    #[test]
    fn snapshot_of_a_missing_name_is_not_found() {
        let catalog = Catalog::new();
        let err = catalog.snapshot(&laptop()).unwrap_err();
        assert_eq!(err, DomainError::not_found("Laptop1"));
    }

    #[test]
    fn products_iterate_in_name_order() {
        let mut catalog = Catalog::new();
        catalog.register(ProductName::new("Laptop1"), dec!(800), true, dec!(5));
        catalog.register(ProductName::new("Headphones1"), dec!(50), false, dec!(0));

        let names: Vec<&str> = catalog.products().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Headphones1", "Laptop1"]);
    }

    #[test]
    fn register_and_update_notify_the_subscriber() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut catalog = Catalog::new();
        catalog.subscribe(move |event| sink.borrow_mut().push(event.event_type()));

        catalog.register(laptop(), dec!(800), true, dec!(5));
        catalog.update(&laptop(), false, 3, dec!(0)).unwrap();

        assert_eq!(
            *seen.borrow(),
            vec!["catalog.product.registered", "catalog.product.updated"]
        );
    }

    #[test]
    fn count_mutations_do_not_notify() {
        // Only the admin-facing mutations route through the bridge; stock
        // bookkeeping stays silent.
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut catalog = Catalog::new();
        catalog.register(laptop(), dec!(800), true, dec!(5));
        catalog.subscribe(move |event| sink.borrow_mut().push(event.event_type()));

        catalog.set_count(&laptop(), 20).unwrap();
        catalog.get_mut(&laptop()).unwrap().count = 15;

        assert!(seen.borrow().is_empty());
    }
}
