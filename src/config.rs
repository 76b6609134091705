// src/config.rs
// =============================================================================
// Runtime configuration, built from the parsed command line.
//
// All settings come from flags; log verbosity comes from RUST_LOG.
// =============================================================================

use anyhow::{bail, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;
use crate::crawl::CrawlOptions;

pub const DEFAULT_SEED: &str = "https://brightdata.com";
pub const DEFAULT_FORMAT: &str = "a";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub seed: String,
    pub format: String,
    pub output_dir: PathBuf,
    pub timeout: Duration,
    pub crawl: CrawlOptions,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.timeout == 0 {
            bail!("--timeout must be at least 1 second");
        }

        Ok(Self {
            seed: cli.url,
            format: cli.format,
            output_dir: cli.output_dir,
            timeout: Duration::from_secs(cli.timeout),
            crawl: CrawlOptions {
                delay: Duration::from_millis(cli.delay_ms),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli() {
        let cli = Cli::try_parse_from([
            "site-mapper",
            "-u",
            "https://example.com",
            "--timeout",
            "3",
            "--delay-ms",
            "250",
        ])
        .unwrap();
        let config = Config::from_cli(cli).unwrap();

        assert_eq!(config.seed, "https://example.com");
        assert_eq!(config.format, DEFAULT_FORMAT);
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.crawl.delay, Duration::from_millis(250));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let cli = Cli::try_parse_from(["site-mapper", "--timeout", "0"]).unwrap();
        assert!(Config::from_cli(cli).is_err());
    }
}
