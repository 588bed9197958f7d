// src/config.rs
// =============================================================================
// Run configuration.
//
// The command line is the only configuration source: there is no config file
// and no environment variable (apart from RUST_LOG, which only affects
// logging). `Config` is the parsed, validated form of those flags that the
// rest of the program works with.
// =============================================================================

use crate::cli::Cli;
use anyhow::Result;
use reqwest::Client;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

/// File that receives links answering HTTP 200.
pub const VALID_LINKS_FILE: &str = "valid_links.txt";

/// File that receives every other link.
pub const BROKEN_LINKS_FILE: &str = "broken_links.txt";

#[derive(Debug, Clone)]
pub struct Config {
    /// How many link checks may be in flight at once (1 = strictly sequential)
    pub concurrency: NonZeroUsize,
    /// Per-request timeout; None keeps the HTTP client's default
    pub timeout: Option<Duration>,
    /// Directory the two result files are written into
    pub output_dir: PathBuf,
    /// Resolve relative hrefs against the page URL before checking them
    pub resolve_relative: bool,
    /// Print the final report as JSON
    pub json: bool,
    /// Debug-level logging
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            concurrency: NonZeroUsize::MIN,
            timeout: None,
            output_dir: PathBuf::from("."),
            resolve_relative: false,
            json: false,
            verbose: false,
        }
    }
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            concurrency: cli.concurrency,
            timeout: cli.timeout.map(Duration::from_secs),
            output_dir: cli.output_dir.clone(),
            resolve_relative: cli.resolve_relative,
            json: cli.json,
            verbose: cli.verbose,
        }
    }

    pub fn valid_links_path(&self) -> PathBuf {
        self.output_dir.join(VALID_LINKS_FILE)
    }

    pub fn broken_links_path(&self) -> PathBuf {
        self.output_dir.join(BROKEN_LINKS_FILE)
    }

    /// Builds the HTTP client shared by the page fetch and every link check.
    ///
    /// Redirects follow reqwest's default policy, so a link that redirects to
    /// a 200 page counts as valid.
    pub fn build_client(&self) -> Result<Client> {
        let mut builder =
            Client::builder().user_agent(concat!("link-sieve/", env!("CARGO_PKG_VERSION")));

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(builder.build()?)
    }
}
