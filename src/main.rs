//! atrezzo-scraper - Catalog scraper CLI for the Atrezzo Vázquez prop inventory.

use anyhow::Result;
use atrezzo_scraper::commands::ScrapeCommand;
use atrezzo_scraper::config::{Config, OutputFormat};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "atrezzo-scraper",
    version,
    about = "Scrapes the Atrezzo Vázquez catalog into a table",
    long_about = "Fetches one catalog page from atrezzovazquez.es and prints the \
                  product listing as a six-column table."
)]
struct Cli {
    /// Catalog page URL (defaults to the configured catalog page)
    url: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    format: OutputFormat,

    /// Request timeout in seconds
    #[arg(long, env = "ATREZZO_TIMEOUT")]
    timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    let url = cli.url.unwrap_or_else(|| config.catalog_url.clone());

    let cmd = ScrapeCommand::new(config);
    match cmd.execute(&url).await? {
        Some(output) => println!("{}", output),
        // The fetch diagnostic was already logged; there is no table
        None => std::process::exit(1),
    }

    Ok(())
}
