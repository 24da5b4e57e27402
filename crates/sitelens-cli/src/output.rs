//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use sitelens_core::{AnalysisReport, Platform};

/// Print a full analysis report.
pub fn print_report(report: &AnalysisReport) {
    println!("{}", "Site Analysis".cyan().bold());
    println!();
    println!("{}", report.description);
    println!();

    println!("{} {}", "SEO Score:".bold(), score_colored(report.seo_score));
    println!("  {}", render_gauge(report.seo_score, gauge_width()));
    println!();

    if !report.keywords.is_empty() {
        println!("{}", "Keyword Density".bold());
        for line in keyword_lines(&report.keywords) {
            println!("  {}", line);
        }
        println!();
    }

    println!("{}", "Marketing Strategy".bold());
    println!("{}", report.marketing_strategy);

    if !report.social_suggestions.is_empty() {
        println!();
        println!("{}", "Social Media Suggestions".bold());
        for (platform, posts) in &report.social_suggestions {
            println!();
            println!("  {}", platform_header(platform));
            for post in posts {
                println!("    {} {}", "•".dimmed(), post);
            }
        }
    }
}

/// Displayed `keyword: density%` lines, names padded to a common column.
fn keyword_lines(keywords: &[(String, f64)]) -> Vec<String> {
    let name_width = keywords
        .iter()
        .map(|(keyword, _)| UnicodeWidthStr::width(keyword.as_str()))
        .max()
        .unwrap_or(0);

    keywords
        .iter()
        .map(|(keyword, density)| {
            let padding = name_width - UnicodeWidthStr::width(keyword.as_str());
            format!("{}{}: {}%", keyword, " ".repeat(padding), density)
        })
        .collect()
}

/// Score text colored by band.
fn score_colored(score: u8) -> ColoredString {
    let text = format!("{}/100", score);
    match score {
        0..=39 => text.red().bold(),
        40..=69 => text.yellow().bold(),
        _ => text.green().bold(),
    }
}

/// Filled/empty bar proportional to the score.
fn render_gauge(score: u8, width: usize) -> String {
    let filled = usize::from(score.min(100)) * width / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn gauge_width() -> usize {
    let term = terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80);
    term.saturating_sub(10).clamp(10, 40)
}

fn platform_header(key: &str) -> ColoredString {
    match Platform::from_key(key) {
        Some(Platform::Facebook) => Platform::Facebook.label().blue().bold(),
        Some(Platform::Twitter) => Platform::Twitter.label().cyan().bold(),
        Some(Platform::Instagram) => Platform::Instagram.label().magenta().bold(),
        Some(Platform::Linkedin) => Platform::Linkedin.label().blue().bold(),
        None => key.normal().bold(),
    }
}
