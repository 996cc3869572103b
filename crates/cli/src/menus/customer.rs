//! Customer menu: browsing, cart management, checkout.

use anyhow::Result;
use dialoguer::{Input, Select};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use ecart_core::ProductName;
use ecart_pricing::DiscountPolicy;

use crate::menus::login;
use crate::seed;
use crate::session::Session;

pub fn run(session: &mut Session) -> Result<()> {
    let customer = seed::customer_user();
    if !login(&customer, &session.output, session.skip_login)? {
        return Ok(());
    }

    loop {
        session.output.header("Customer Menu");
        let choice = Select::new()
            .with_prompt("Enter your choice")
            .items(&[
                "View Products",
                "Add to Cart",
                "Update Quantity",
                "Remove from Cart",
                "Display Cart",
                "Checkout",
                "Exit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => view_products(session),
            1 => add_to_cart(session)?,
            2 => update_quantity(session)?,
            3 => remove_from_cart(session)?,
            4 => display_cart(session),
            5 => {
                checkout(session)?;
                break;
            }
            _ => break,
        }
    }

    Ok(())
}

fn view_products(session: &Session) {
    for product in session.catalog.products() {
        session.output.line(&product.to_string());
    }
}

fn add_to_cart(session: &mut Session) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Product name to add to cart")
        .interact_text()?;
    let name = ProductName::new(name);

    let Some(entry) = session.catalog.get(&name) else {
        tracing::warn!("product {} not found", name);
        session.output.warn(&format!("product {name} not found"));
        return Ok(());
    };

    // Storefront promotion: any product advertising a discount goes in at a
    // flat 10% off; everything else at list price.
    let discount = if entry.discount_percent > Decimal::ZERO {
        DiscountPolicy::PercentageOff(dec!(10))
    } else {
        DiscountPolicy::None
    };

    let quantity: i64 = Input::new().with_prompt("Quantity").interact_text()?;

    match session
        .cart
        .add_from_catalog(&session.catalog, &name, quantity, discount)
    {
        Ok(()) => session
            .output
            .success(&format!("added {quantity} x {name} to the cart")),
        Err(err) => session.output.warn(&err.to_string()),
    }
    Ok(())
}

fn update_quantity(session: &mut Session) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Product name to update quantity")
        .interact_text()?;
    let new_quantity: i64 = Input::new().with_prompt("New quantity").interact_text()?;

    session
        .cart
        .update_quantity(&ProductName::new(name), new_quantity);
    Ok(())
}

fn remove_from_cart(session: &mut Session) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Product name to remove")
        .interact_text()?;
    let quantity: i64 = Input::new()
        .with_prompt("Quantity to remove (0 to remove all)")
        .interact_text()?;

    let remove_quantity = if quantity == 0 { None } else { Some(quantity) };
    session.cart.remove(&ProductName::new(name), remove_quantity);
    Ok(())
}

fn display_cart(session: &Session) {
    if session.cart.is_empty() {
        session.output.info("your cart is empty");
        return;
    }

    for item in session.cart.items() {
        session.output.line(&item.to_string());
    }
    session
        .output
        .info(&format!("You have {} in your cart.", session.cart.summary()));
    session
        .output
        .info(&format!("Your total bill is ${}.", session.cart.total()));
}

fn checkout(session: &mut Session) -> Result<()> {
    display_cart(session);

    match session.cart.checkout(&mut session.catalog) {
        Ok(()) => {
            // Clearing is the cart owner's job, not checkout's.
            session.cart.clear();
            session
                .output
                .success("Purchase successful! Thank you for shopping with us.");
        }
        Err(err) => session.output.error(&err.to_string()),
    }
    Ok(())
}
