//! EcoCart CLI
//!
//! Eco-friendly storefront demo: browse the catalog, run AI
//! sustainability analyses and serve the JSON API.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Initialize tracing with optional file logging.
fn init_tracing(log_file: Option<&std::path::Path>, verbose: bool) {
    let default_filter = if verbose {
        "ecocart=debug,ecocart_core=debug,ecocart_ai=debug,ecocart_web=debug"
    } else {
        "ecocart=info,ecocart_web=debug"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if let Some(path) = log_file {
        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .expect("Failed to open log file");

        // Log to both stdout and file when --log is used
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Check if serve command with --log
    let log_file = match &cli.command {
        Commands::Serve(args) if args.log || args.log_file.is_some() => Some(
            args.log_file
                .clone()
                .unwrap_or_else(|| std::path::PathBuf::from(".ecocart/serve.log")),
        ),
        _ => None,
    };

    init_tracing(log_file.as_deref(), cli.verbose);

    cli.execute().await
}
