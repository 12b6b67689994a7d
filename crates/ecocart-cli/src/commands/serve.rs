//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use ecocart_ai::AiConfig;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (implies --log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, config: &AiConfig) -> Result<()> {
    let ai_status = if config.api_key.is_some() {
        "configured".green()
    } else {
        "no API key".yellow()
    };

    println!();
    println!("  {} {}", "EcoCart".green().bold(), "API Server".bold());
    println!();
    println!("  {}          http://{}:{}/api", "API".green(), args.host, args.port);
    println!("  {}  {}", "AI analysis".green(), ai_status);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    ecocart_web::run_server(config, &args.host, args.port).await
}
