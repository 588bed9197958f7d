// src/logging.rs
// =============================================================================
// Diagnostic logging setup.
//
// Two kinds of output exist in this program:
// - Messages for the operator ("Invalid URL", "Link processing completed")
//   are plain println! calls to stdout.
// - Diagnostics (why a fetch failed, what each link returned) go through
//   `tracing` and are written to stderr, so they never mix with --json output.
//
// RUST_LOG overrides the default filter, e.g. RUST_LOG=link_sieve=trace.
// =============================================================================

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// Fails if a subscriber was already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {}", e))?;

    tracing::debug!("logging initialized");
    Ok(())
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,link_sieve=debug"
    } else {
        "warn"
    }
}
