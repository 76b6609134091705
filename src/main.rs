// src/main.rs
// =============================================================================
// This is the entry point of the site-mapper CLI.
//
// What happens here:
// 1. Parse command-line arguments and build the configuration
// 2. Classify the seed URL (a seed that doesn't parse is fatal)
// 3. Crawl every same-domain page reachable from the seed
// 4. Sort the site map by URL
// 5. Write the requested formats (an unknown format code writes nothing)
//
// Exit codes: 0 = success (including an unknown format code),
//             1 = bad seed URL, bad flags or a failed file write
// =============================================================================

mod classify;
mod cli;
mod config;
mod crawl;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use classify::UrlRecord;
use cli::Cli;
use config::Config;
use crawl::HttpFetcher;
use output::OutputFormat;

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr; progress lines stay on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run() -> Result<()> {
    println!("CRALWER...");

    let config = Config::from_cli(Cli::parse())?;

    let seed = UrlRecord::parse(&config.seed)?;
    println!("{}", seed);

    // Crawl, with "Visiting <url>" progress lines on stdout
    let fetcher = HttpFetcher::new(config.timeout)?;
    let mut stdout = std::io::stdout();
    let mut result = crawl::crawl_site(&fetcher, &seed, &config.crawl, &mut stdout).await;

    // The site map is written in URL order
    result.sort_records();

    if result.pages_failed > 0 {
        tracing::warn!(
            "{} of {} page(s) could not be fetched",
            result.pages_failed,
            result.pages_fetched + result.pages_failed
        );
    }

    match OutputFormat::from_code(&config.format) {
        Some(formats) => {
            let labels: Vec<_> = formats.iter().map(|f| f.label()).collect();
            println!("Writing {} file(s)...", labels.join(", "));

            for format in formats {
                output::write_site_map(format, &result.records, &seed, &config.output_dir)?;
            }
        }
        None => {
            println!("Not a valid file type. Not writing....");
        }
    }

    println!("Scraping completed");
    Ok(())
}
