//! Marketplace commands.

use anyhow::Result;
use clap::Args;

use crate::output;
use ecocart_core::marketplace::Marketplace;

#[derive(Args)]
pub struct MarketplaceArgs {
    /// Filter by category
    #[arg(long)]
    pub category: Option<String>,

    /// Search term matched against listing titles
    #[arg(long)]
    pub query: Option<String>,
}

pub fn execute(args: MarketplaceArgs) -> Result<()> {
    let marketplace = Marketplace::seeded();
    let listings = marketplace.filter(args.category.as_deref(), args.query.as_deref());
    output::print_listings_table(&listings);

    Ok(())
}
