//! AI analysis command.

use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::output;
use ecocart_ai::{config::API_KEY_ENV, AiConfig, GeminiClient};
use ecocart_core::analysis;
use ecocart_core::catalog::Catalog;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Product id from the catalog, or a free-form product name
    pub product: String,

    /// Analyze a specific image instead of the catalog photo
    #[arg(long)]
    pub image_url: Option<String>,

    /// Print the raw analysis text instead of parsed sections
    #[arg(long)]
    pub raw: bool,
}

pub async fn execute(args: AnalyzeArgs, config: &AiConfig) -> Result<()> {
    let catalog = Catalog::seeded();

    // A numeric argument is a catalog id; otherwise try a catalog name
    // before treating it as free-form.
    let product = match args.product.parse::<u32>() {
        Ok(id) => Some(catalog.get(id)?),
        Err(_) => catalog.find_by_name(&args.product),
    };
    let (name, catalog_image) = match product {
        Some(product) => (
            product.name.clone(),
            product.has_real_image().then(|| product.image.clone()),
        ),
        None => (args.product.clone(), None),
    };
    let image = args.image_url.clone().or(catalog_image);

    let client = GeminiClient::new(config);
    if !client.is_configured() {
        return Err(anyhow!(
            "No API key configured. Set {API_KEY_ENV} or pass --config."
        ));
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(format!("Analyzing \"{name}\"..."));
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = client.analyze_product(&name, image.as_deref()).await;
    spinner.finish_and_clear();

    let text = result?;

    println!("{} {}", "Analysis".cyan().bold(), name.bold());
    println!();

    if args.raw {
        println!("{text}");
        return Ok(());
    }

    output::print_analysis(&analysis::extract(&text));

    Ok(())
}
