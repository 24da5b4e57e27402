//! Analyze command.

use std::time::Duration;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::Input;
use indicatif::ProgressBar;

use sitelens_core::AnalysisSession;
use sitelens_llm::OllamaClient;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Website URL to analyze (prompts interactively when omitted)
    pub url: Option<String>,

    /// Emit the raw report JSON instead of the formatted view
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, client: OllamaClient) -> Result<()> {
    let mut session = AnalysisSession::new();

    match args.url {
        Some(url) => run_once(&mut session, &client, &url, args.json).await,
        None => run_interactive(&mut session, &client, args.json).await,
    }
}

/// One full request cycle: spinner up, submit, render or propagate.
async fn run_once(
    session: &mut AnalysisSession,
    client: &OllamaClient,
    url: &str,
    json: bool,
) -> Result<()> {
    let spinner = spinner(format!("Analyzing {}", url.trim()));
    let outcome = session.submit(client, url).await;
    spinner.finish_and_clear();

    let report = outcome?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report);
    }
    Ok(())
}

/// Prompt for URLs until the user enters an empty line. The session lives
/// across iterations, so each analysis replaces the previous one.
async fn run_interactive(
    session: &mut AnalysisSession,
    client: &OllamaClient,
    json: bool,
) -> Result<()> {
    println!("{}", "AI Marketing Analyzer".cyan().bold());
    println!(
        "{}",
        "Enter a website URL to analyze, or an empty line to quit.".dimmed()
    );
    println!();

    loop {
        let url: String = Input::new()
            .with_prompt("URL")
            .allow_empty(true)
            .interact_text()?;

        if url.trim().is_empty() {
            break;
        }

        if let Err(err) = run_once(session, client, &url, json).await {
            eprintln!("{} {}", "✗".red().bold(), err);
        }
        println!();
    }

    Ok(())
}

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
