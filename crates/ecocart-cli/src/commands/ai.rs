//! AI service commands.

use anyhow::{anyhow, Result};
use clap::Subcommand;
use colored::Colorize;

use ecocart_ai::{config::API_KEY_ENV, AiConfig, GeminiClient};

#[derive(Subcommand)]
pub enum AiCommands {
    /// Probe the AI service with a test prompt
    Test,
}

pub async fn execute(cmd: AiCommands, config: &AiConfig) -> Result<()> {
    match cmd {
        AiCommands::Test => test(config).await,
    }
}

async fn test(config: &AiConfig) -> Result<()> {
    let client = GeminiClient::new(config);
    if !client.is_configured() {
        return Err(anyhow!(
            "No API key configured. Set {API_KEY_ENV} or pass --config."
        ));
    }

    let reply = client.connection_test().await?;

    println!("{} AI service is operational", "OK".green().bold());
    println!("{}: {}", "Model".bold(), client.model());
    println!("{}: {}", "Reply".bold(), reply.trim());

    Ok(())
}
