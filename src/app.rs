// src/app.rs
// =============================================================================
// The pipeline, start to finish.
//
// What happens here:
// 1. Validate the target URL (no network if it's invalid)
// 2. Fetch the page and extract its links
// 3. Check every link
// 4. Write valid_links.txt and broken_links.txt
// 5. Tell the operator how it went
//
// Every step can end the run early with a message. Those early exits are not
// errors: they come back as an `Outcome` and the process still exits with 0.
// Only truly unexpected problems (e.g. the HTTP client can't be built) are
// returned as Err.
// =============================================================================

use crate::checker::{self, Classification, HttpProbe, StatusProbe};
use crate::config::Config;
use crate::output::write_lines;
use crate::validator::is_valid_url;
use anyhow::Result;
use reqwest::Client;
use serde::Serialize;

// Operator messages go to stdout, except with --json, where stdout carries
// only the report and the messages move to stderr
macro_rules! say {
    ($config:expr, $($arg:tt)*) => {
        if $config.json {
            eprintln!($($arg)*);
        } else {
            println!($($arg)*);
        }
    };
}

/// Summary of a completed run, printed with --json.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub target: String,
    #[serde(flatten)]
    pub links: Classification,
    /// Result files that could not be written
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub write_failures: Vec<String>,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The target URL had no scheme or no host; nothing was requested
    InvalidUrl,
    /// The target page could not be downloaded
    FetchFailed,
    /// The page was downloaded but contains no <a> elements
    NoLinks,
    /// Links were checked and the result files were written (or attempted)
    Completed(Report),
}

/// Runs the whole pipeline against `target` using the real HTTP client.
pub async fn run(config: &Config, target: &str) -> Result<Outcome> {
    if !is_valid_url(target) {
        say!(config, "❌ Invalid URL: {}", target);
        return Ok(Outcome::InvalidUrl);
    }

    let client = config.build_client()?;
    let probe = HttpProbe::new(client.clone());
    Ok(run_with(config, target, &client, &probe).await)
}

/// Same as [`run`], but with the page client and link probe supplied by the
/// caller. The target must already be validated.
pub async fn run_with<P: StatusProbe>(
    config: &Config,
    target: &str,
    client: &Client,
    probe: &P,
) -> Outcome {
    say!(config, "🔍 Fetching webpage: {}", target);

    let links = match checker::fetch_links(client, target, config.resolve_relative).await {
        Ok(links) => links,
        Err(e) => {
            say!(config, "❌ Error occurred while fetching the webpage: {}", e);
            return Outcome::FetchFailed;
        }
    };

    if links.is_empty() {
        say!(config, "⚠️  No links found on the webpage.");
        return Outcome::NoLinks;
    }

    say!(config, "🌐 Checking {} link(s)...", links.len());
    let classification = checker::classify(probe, links, config.concurrency).await;

    // Both files are always attempted, even if the first one fails
    let mut write_failures = Vec::new();
    let outputs = [
        (config.valid_links_path(), &classification.valid),
        (config.broken_links_path(), &classification.broken),
    ];
    for (path, lines) in &outputs {
        if let Err(e) = write_lines(path, lines.as_slice()) {
            tracing::warn!(error = %e, "failed to save links");
            say!(config, "❌ Error occurred while saving links to file: {}", e);
            write_failures.push(path.display().to_string());
        }
    }

    say!(config, "✅ Link processing completed.");
    say!(config, "   Valid: {}", classification.valid.len());
    say!(config, "   Broken: {}", classification.broken.len());

    Outcome::Completed(Report {
        target: target.to_string(),
        links: classification,
        write_failures,
    })
}
