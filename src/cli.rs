// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// There is a single command: check every link on one page. The page URL can
// come from the --url flag, or, if it's missing, from one line typed at an
// interactive prompt.
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct definition
// - Generics over traits: the prompt works with any reader/writer, so tests
//   can feed it a byte slice instead of the real stdin
// =============================================================================

use anyhow::{anyhow, Result};
use clap::Parser;
use std::io::{BufRead, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Text shown when the URL has to be typed in.
pub const URL_PROMPT: &str = "Enter the URL of the webpage: ";

// #[derive(Parser)] tells clap to automatically generate parsing code
#[derive(Parser, Debug)]
#[command(
    name = "link-sieve",
    version,
    about = "Check every link on a web page and sort them into valid and broken lists",
    long_about = "link-sieve downloads one web page, collects the href of every <a> element, \
                  requests each of them and writes the ones answering HTTP 200 to \
                  valid_links.txt and all the others to broken_links.txt."
)]
pub struct Cli {
    /// URL of the webpage to check (prompted for when omitted)
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// How many links to check at the same time
    ///
    /// The default of 1 checks links strictly one after another.
    #[arg(short = 'c', long, default_value = "1")]
    pub concurrency: NonZeroUsize,

    /// Per-request timeout in seconds (default: no timeout)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Directory to write valid_links.txt and broken_links.txt into
    #[arg(short = 'o', long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Resolve relative links against the page URL before checking them
    #[arg(long)]
    pub resolve_relative: bool,

    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the URL given on the command line, or asks for one on stdin.
    ///
    /// With --json the prompt goes to stderr so stdout holds only the report.
    pub fn target_url(&self) -> Result<String> {
        match &self.url {
            Some(url) => Ok(url.clone()),
            None if self.json => prompt_for_url(std::io::stdin().lock(), std::io::stderr().lock()),
            None => prompt_for_url(std::io::stdin().lock(), std::io::stdout().lock()),
        }
    }
}

/// Prints the prompt and reads a single line, without its line terminator.
///
/// An empty answer is returned as an empty string (the validator rejects it
/// later); only a closed input stream is an error.
pub fn prompt_for_url<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<String> {
    write!(output, "{}", URL_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        return Err(anyhow!("no URL given: input closed before a line was read"));
    }

    Ok(line.trim().to_string())
}
