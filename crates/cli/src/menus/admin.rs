//! Admin menu: catalog management.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};
use rust_decimal::Decimal;

use ecart_core::{DomainError, ProductName};

use crate::menus::login;
use crate::seed;
use crate::session::Session;

pub fn run(session: &mut Session) -> Result<()> {
    let admin = seed::admin_user();
    if !login(&admin, &session.output, session.skip_login)? {
        return Ok(());
    }

    loop {
        session.output.header("Admin Menu");
        let choice = Select::new()
            .with_prompt("Enter your choice")
            .items(&[
                "Add New Product",
                "Update Product",
                "View Products",
                "Exit",
            ])
            .default(0)
            .interact()?;

        match choice {
            0 => add_product(session)?,
            1 => update_product(session)?,
            2 => view_products(session),
            _ => break,
        }
    }

    Ok(())
}

fn add_product(session: &mut Session) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Product name")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err(DomainError::validation("name cannot be empty"))
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    let price: Decimal = Input::new().with_prompt("Product price").interact_text()?;
    let available = Confirm::new()
        .with_prompt("Is the product available?")
        .default(true)
        .interact()?;
    let discount: Decimal = Input::new()
        .with_prompt("Discount percentage")
        .interact_text()?;
    let count: i64 = Input::new()
        .with_prompt("Initial product count")
        .interact_text()?;

    let name = ProductName::new(name);
    session
        .catalog
        .register(name.clone(), price, available, discount);
    session.catalog.set_count(&name, count)?;
    session.output.success(&format!("added {name}"));
    Ok(())
}

fn update_product(session: &mut Session) -> Result<()> {
    let name: String = Input::new()
        .with_prompt("Product name to update")
        .interact_text()?;
    let name = ProductName::new(name);

    if !session.catalog.contains(&name) {
        tracing::warn!("product {} not found", name);
        session.output.warn(&format!("product {name} not found"));
        return Ok(());
    }

    let available = Confirm::new()
        .with_prompt("Is the product available?")
        .default(true)
        .interact()?;
    let count: i64 = Input::new()
        .with_prompt("New product count")
        .interact_text()?;
    let discount: Decimal = Input::new()
        .with_prompt("New discount percentage")
        .interact_text()?;

    session.catalog.update(&name, available, count, discount)?;
    session.output.success(&format!("updated {name}"));
    Ok(())
}

fn view_products(session: &Session) {
    for product in session.catalog.products() {
        session.output.line(&product.to_string());
    }
}
