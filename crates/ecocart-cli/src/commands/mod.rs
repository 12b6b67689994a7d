//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ecocart_ai::AiConfig;

pub mod ai;
pub mod analyze;
pub mod dashboard;
pub mod groups;
pub mod marketplace;
pub mod products;
pub mod serve;

/// EcoCart - Eco-Friendly Shopping Demo
#[derive(Parser)]
#[command(name = "ecocart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML config file holding the AI credentials
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse the product catalog
    #[command(subcommand)]
    Products(products::ProductCommands),

    /// Browse second-hand marketplace listings
    Marketplace(marketplace::MarketplaceArgs),

    /// Show the rewards dashboard
    Dashboard,

    /// Community group-buy orders
    #[command(subcommand)]
    Groups(groups::GroupCommands),

    /// Run an AI sustainability analysis for a product
    Analyze(analyze::AnalyzeArgs),

    /// AI service commands
    #[command(subcommand)]
    Ai(ai::AiCommands),

    /// Start the web server
    Serve(serve::ServeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = load_config(self.config.as_deref())?;

        match self.command {
            Commands::Products(cmd) => products::execute(cmd),
            Commands::Marketplace(args) => marketplace::execute(args),
            Commands::Dashboard => dashboard::execute(),
            Commands::Groups(cmd) => groups::execute(cmd),
            Commands::Analyze(args) => analyze::execute(args, &config).await,
            Commands::Ai(cmd) => ai::execute(cmd, &config).await,
            Commands::Serve(args) => serve::execute(args, &config).await,
        }
    }
}

/// Load the AI configuration: file when given, environment otherwise.
fn load_config(path: Option<&std::path::Path>) -> Result<AiConfig> {
    let config = match path {
        Some(path) => AiConfig::load(path)?,
        None => AiConfig::from_env(),
    };
    tracing::debug!(source = ?path, model = %config.model, "loaded AI configuration");
    Ok(config)
}
