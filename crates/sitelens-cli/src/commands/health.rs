//! Health command.

use anyhow::Result;
use colored::Colorize;

use sitelens_llm::OllamaClient;

pub async fn execute(client: OllamaClient) -> Result<()> {
    if client.health_check().await {
        println!(
            "{} model {} is available at {}",
            "✓".green().bold(),
            client.model().cyan(),
            client.endpoint()
        );
        Ok(())
    } else {
        println!(
            "{} model {} is not available at {}",
            "✗".red().bold(),
            client.model().cyan(),
            client.endpoint()
        );
        anyhow::bail!("inference endpoint unreachable or model missing")
    }
}
