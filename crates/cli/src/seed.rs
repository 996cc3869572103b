//! Demo data loaded at startup.

use rust_decimal_macros::dec;

use ecart_auth::{Role, User};
use ecart_catalog::Catalog;
use ecart_core::{DomainResult, ProductName};

/// Sample catalog: register first, then overwrite the count with the real
/// starting stock (registration defaults it).
pub fn load_products(catalog: &mut Catalog) -> DomainResult<()> {
    let laptop = ProductName::new("Laptop1");
    catalog.register(laptop.clone(), dec!(800), true, dec!(5));
    catalog.set_count(&laptop, 20)?;

    let headphones = ProductName::new("Headphones1");
    catalog.register(headphones.clone(), dec!(50), false, dec!(0));
    catalog.set_count(&headphones, 10)?;

    Ok(())
}

/// Sample admin login.
pub fn admin_user() -> User {
    User::new("admin", "admin123", Role::Admin)
}

/// Sample customer login.
pub fn customer_user() -> User {
    User::new("customer", "pass123", Role::Customer)
}
