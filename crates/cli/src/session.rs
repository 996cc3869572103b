//! Interactive session state: the catalog, the cart, and the main menu loop.

use anyhow::Result;
use dialoguer::Select;

use ecart_cart::Cart;
use ecart_catalog::Catalog;

use crate::menus;
use crate::output::Output;
use crate::seed;

/// Everything one interactive run owns: the process-lifetime catalog, the
/// session's cart, and the console surface.
pub struct Session {
    pub catalog: Catalog,
    pub cart: Cart,
    pub output: Output,
    pub skip_login: bool,
}

impl Session {
    pub fn new(skip_login: bool) -> Result<Self> {
        let mut catalog = Catalog::new();
        seed::load_products(&mut catalog)?;

        // One-way bridge: admin-side catalog mutations surface as a refresh
        // notice on the customer-facing console.
        let output = Output::new();
        let notice = output.clone();
        catalog.subscribe(move |event| {
            notice.info(&format!(
                "product list changed ({}); view products to see the latest catalog",
                event.product_name()
            ));
        });

        Ok(Self {
            catalog,
            cart: Cart::new(),
            output,
            skip_login,
        })
    }

    /// Welcome loop: route to a role menu until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.output.header("Welcome to e-cart!");
            let choice = Select::new()
                .with_prompt("Select user type")
                .items(&["Customer", "Admin", "Quit"])
                .default(0)
                .interact()?;

            match choice {
                0 => menus::customer::run(self)?,
                1 => menus::admin::run(self)?,
                _ => break,
            }
        }

        Ok(())
    }
}
