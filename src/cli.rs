// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The two core flags mirror the classic crawler interface:
//   -u <url>   seed URL          (default: https://brightdata.com)
//   -f <code>  output selection  (default: a)
//
// Format codes: a = CSV + JSON + TXT, c = CSV, j = JSON, t = TXT.
// The code is kept as a plain string so an unknown code can be reported and
// skipped instead of rejected by the parser.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_FORMAT, DEFAULT_SEED, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(
    name = "site-mapper",
    version,
    about = "Crawl a website and write a site map of every same-domain page",
    long_about = "site-mapper starts at a seed URL, follows every <a href> that stays on the \
                  seed's domain, and writes the URLs it found as CSV, JSON and/or plain text."
)]
pub struct Cli {
    /// URL to start crawling from
    #[arg(short = 'u', long = "url", default_value = DEFAULT_SEED)]
    pub url: String,

    /// Output format: a = all, c = CSV, j = JSON, t = TXT
    #[arg(short = 'f', long = "format", default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// Directory the site-map files are written to
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Pause between page fetches, in milliseconds
    #[arg(long = "delay-ms", default_value_t = 0)]
    pub delay_ms: u64,
}
