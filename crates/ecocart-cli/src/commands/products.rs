//! Product catalog commands.

use anyhow::Result;
use clap::Subcommand;

use crate::output;
use ecocart_core::catalog::Catalog;

#[derive(Subcommand)]
pub enum ProductCommands {
    /// List products, optionally filtered by a search term
    List {
        /// Search term matched against product names
        #[arg(long)]
        query: Option<String>,
    },

    /// Show one product in detail
    Show {
        /// Product id
        id: u32,
    },
}

pub fn execute(cmd: ProductCommands) -> Result<()> {
    let catalog = Catalog::seeded();

    match cmd {
        ProductCommands::List { query } => {
            let products = match query.as_deref() {
                Some(q) => catalog.search(q),
                None => catalog.products().iter().collect(),
            };
            output::print_products_table(&products);
        }
        ProductCommands::Show { id } => {
            let product = catalog.get(id)?;
            output::print_product(product);
        }
    }

    Ok(())
}
