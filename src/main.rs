// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up diagnostic logging
// 3. Get the target URL (flag or interactive prompt)
// 4. Run the pipeline and optionally print the JSON report
// 5. Exit with 0 for every normal outcome, 2 for unexpected errors
//
// "Invalid URL" and "no links found" are normal outcomes: they are reported
// as messages, not as failing exit codes.
// =============================================================================

use anyhow::Result;
use clap::Parser; // Parser trait enables the parse() method
use link_sieve::cli::Cli;
use link_sieve::logging::init_logging;
use link_sieve::{run, Config, Outcome};

#[tokio::main]
async fn main() {
    let exit_code = match try_main().await {
        Ok(()) => 0,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_cli(&cli);

    // Logging is nice to have; a failure here shouldn't stop the run
    if let Err(e) = init_logging(config.verbose) {
        eprintln!("Warning: {}", e);
    }

    let target = cli.target_url()?;

    if let Outcome::Completed(report) = run(&config, &target).await? {
        if config.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
