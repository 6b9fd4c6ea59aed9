//! imdb-ratings: scrape per-episode IMDb ratings of a show and print them as JSON.
//!
//! Logs go to stderr so stdout stays machine-readable.

mod args;

use anyhow::{Context, Result};
use clap::Parser;
use imdb_core::ShowRatingScraper;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let scraper = ShowRatingScraper::with_config(args.url.as_str(), args.client_config())
        .context("Failed to create HTTP client")?;

    let ratings = scraper
        .get_rates()
        .await
        .with_context(|| format!("Failed to scrape ratings for {}", args.url))?;
    info!("Scraped {} seasons", ratings.season.len());

    let json = if args.pretty {
        serde_json::to_string_pretty(&ratings)?
    } else {
        serde_json::to_string(&ratings)?
    };
    println!("{}", json);

    Ok(())
}
