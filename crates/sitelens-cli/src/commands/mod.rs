//! CLI command definitions and handlers.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sitelens_llm::OllamaClient;

use crate::config::config_from;

pub mod analyze;
pub mod health;
pub mod serve;

/// Sitelens - AI Website Marketing Analyzer
#[derive(Parser)]
#[command(name = "sitelens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Inference endpoint base URL
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Generation model name
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Generation length cap
    #[arg(long, global = true)]
    pub max_tokens: Option<u32>,

    /// Path to a config file (defaults to ./sitelens.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a website (interactive when no URL is given)
    Analyze(analyze::AnalyzeArgs),

    /// Start the web UI
    Serve(serve::ServeArgs),

    /// Check that the inference endpoint and model are available
    Health,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = config_from(self.config.as_deref(), self.endpoint, self.model, self.max_tokens)?;
        let client = OllamaClient::new(config);

        match self.command {
            Commands::Analyze(args) => analyze::execute(args, client).await,
            Commands::Serve(args) => serve::execute(args, client).await,
            Commands::Health => health::execute(client).await,
        }
    }
}
