use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ecart_core::ProductName;
use ecart_events::Event;

/// Event: ProductRegistered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRegistered {
    pub name: ProductName,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductUpdated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductUpdated {
    pub name: ProductName,
    pub available: bool,
    pub count: i64,
    pub discount_percent: Decimal,
    pub occurred_at: DateTime<Utc>,
}

/// Catalog mutations surfaced to the dependent customer view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEvent {
    ProductRegistered(ProductRegistered),
    ProductUpdated(ProductUpdated),
}

impl CatalogEvent {
    /// Name of the product the event concerns.
    pub fn product_name(&self) -> &ProductName {
        match self {
            CatalogEvent::ProductRegistered(e) => &e.name,
            CatalogEvent::ProductUpdated(e) => &e.name,
        }
    }
}

impl Event for CatalogEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CatalogEvent::ProductRegistered(_) => "catalog.product.registered",
            CatalogEvent::ProductUpdated(_) => "catalog.product.updated",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CatalogEvent::ProductRegistered(e) => e.occurred_at,
            CatalogEvent::ProductUpdated(e) => e.occurred_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn event_types_are_stable_identifiers() {
        let registered = CatalogEvent::ProductRegistered(ProductRegistered {
            name: ProductName::new("Laptop1"),
            occurred_at: Utc::now(),
        });
        let updated = CatalogEvent::ProductUpdated(ProductUpdated {
            name: ProductName::new("Laptop1"),
            available: true,
            count: 20,
            discount_percent: dec!(5),
            occurred_at: Utc::now(),
        });

        assert_eq!(registered.event_type(), "catalog.product.registered");
        assert_eq!(updated.event_type(), "catalog.product.updated");
        assert_eq!(registered.version(), 1);
    }

    #[test]
    fn events_serialize_with_stable_shape() {
        let event = CatalogEvent::ProductUpdated(ProductUpdated {
            name: ProductName::new("Laptop1"),
            available: false,
            count: 0,
            discount_percent: dec!(0),
            occurred_at: Utc::now(),
        });

        let value = serde_json::to_value(&event).unwrap();
        let payload = &value["ProductUpdated"];
        assert_eq!(payload["name"], "Laptop1");
        assert_eq!(payload["available"], false);
        assert_eq!(payload["count"], 0);
    }
}
