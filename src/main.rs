use anyhow::Result;
use chrono::Local;
use clap::Parser;
use futures::future::join_all;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

mod config;
mod error;
mod extract;
mod models;
mod parsers;
mod utils;

use crate::config::Config;
use crate::error::ScrapeError;
use crate::extract::{extract_tables, ExtractConfig};
use crate::models::{merge_result_sets, ResultSet};
use crate::utils::http::{create_client, HttpFetcher, PageFetcher};

#[derive(Parser, Debug)]
#[command(
    name = "spec-scraper",
    about = "Extract structured spec tables from H3C switch product pages."
)]
struct Cli {
    /// Product page URL; repeat for a multi-page batch
    #[arg(long = "url", required = true, num_args = 1)]
    urls: Vec<String>,

    /// Output JSON file path
    #[arg(long, short)]
    output: PathBuf,

    /// Keep bare transceiver part numbers in the output
    #[arg(long)]
    include_transceivers: bool,

    /// Politeness delay between fetches, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("spec_scraper=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration; CLI flags override the environment
    let mut config = Config::load()?;
    if cli.include_transceivers {
        config.include_transceivers = true;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.delay_between_fetches_ms = delay_ms;
    }

    for url in &cli.urls {
        url::Url::parse(url).map_err(|_| ScrapeError::InvalidUrl(url.clone()))?;
    }

    info!(
        "--- Starting extraction run at {} ---",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let client = create_client(&config.user_agent)?;
    let fetcher = Arc::new(HttpFetcher::new(
        client,
        Duration::from_millis(config.delay_between_fetches_ms),
    ));
    let extract_config = ExtractConfig {
        include_transceivers: config.include_transceivers,
        min_table_text_len: config.min_table_text_len,
    };

    // Fetch and extract all pages concurrently; each page's pipeline is
    // independent, and per-page results are merged afterwards in argument
    // order.
    let page_futures = cli.urls.iter().map(|url| {
        let fetcher = fetcher.clone();
        let extract_config = extract_config.clone();
        async move {
            info!("Fetching page: {}", url);
            let html = fetcher.fetch(url).await?;
            info!("Page fetched ({} characters)", html.len());

            let result = extract_tables(&html, url, &extract_config);
            info!("Extracted {} models from {}", result.len(), url);
            Ok::<ResultSet, anyhow::Error>(result)
        }
    });

    let mut pages = Vec::new();
    for (url, outcome) in cli.urls.iter().zip(join_all(page_futures).await) {
        match outcome {
            Ok(page) => pages.push(page),
            Err(e) => {
                error!("Failed to process {}: {:#}", url, e);
                return Err(e);
            }
        }
    }

    let merged = merge_result_sets(pages);
    if merged.is_empty() {
        error!("Extraction completed but no models were found");
        return Err(ScrapeError::EmptyResult.into());
    }

    let json = serde_json::to_string_pretty(&merged)?;
    std::fs::write(&cli.output, json)?;
    info!("Saved {} models to {}", merged.len(), cli.output.display());

    for (model, record) in merged.iter().take(5) {
        info!("  - {}: {} fields", model, record.len());
    }
    if merged.len() > 5 {
        info!("  ... and {} more", merged.len() - 5);
    }

    Ok(())
}
