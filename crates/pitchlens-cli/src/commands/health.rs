//! Backend health command.

use anyhow::Result;
use colored::Colorize;
use pitchlens_core::{ApiClient, PitchApi};

pub async fn execute(client: &ApiClient) -> Result<()> {
    match client.health().await {
        Ok(health) => {
            println!(
                "{} {} is {}",
                "✓".green().bold(),
                client.base_url().cyan(),
                health.status.green()
            );
            Ok(())
        }
        Err(e) => {
            println!(
                "{} {} is unreachable",
                "✗".red().bold(),
                client.base_url().cyan()
            );
            Err(e.into())
        }
    }
}
