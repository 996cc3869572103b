//! e-cart - console shopping-cart demo.
//!
//! Menus:
//! - main: pick a role (customer or admin)
//! - admin: add/update/view products
//! - customer: browse, manage the cart, check out

mod menus;
mod output;
mod seed;
mod session;

use anyhow::Result;
use clap::Parser;

use session::Session;

/// e-cart - console storefront with admin and customer menus
#[derive(Parser)]
#[command(name = "ecart")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Skip the login prompts (the demo credentials are accepted implicitly)
    #[arg(long)]
    no_login: bool,
}

fn main() -> Result<()> {
    ecart_observability::init();

    let cli = Cli::parse();

    let mut session = Session::new(cli.no_login)?;
    session.run()
}
