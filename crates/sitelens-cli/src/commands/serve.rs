//! Serve command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::warn;

use sitelens_llm::OllamaClient;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, default_value_t = 3000)]
    pub port: u16,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to .sitelens/serve.log)
    #[arg(long, requires = "log")]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs, client: OllamaClient) -> Result<()> {
    if !client.health_check().await {
        warn!(
            endpoint = client.endpoint(),
            model = client.model(),
            "Inference endpoint or model not available; analyses will fail until it is"
        );
    }

    sitelens_web::run_server(client, args.port).await
}
