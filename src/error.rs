// src/error.rs
// =============================================================================
// Error kinds for the parts of the pipeline that talk to the outside world.
//
// - FetchError: the target page could not be downloaded
// - OutputError: a result file could not be written
//
// Per-link check failures are not here: they are never surfaced to the
// caller, they just turn the link into a broken one.
//
// We use `thiserror` to derive std::error::Error and Display for each enum.
// Application code (app.rs, main.rs) still uses anyhow::Result for plumbing.
// =============================================================================

use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why fetching the target page failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// DNS failure, refused connection, timeout, invalid body, ...
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered, but not with a 2xx status.
    #[error("server returned HTTP {0}")]
    Status(StatusCode),
}

/// Why a result file could not be written.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
