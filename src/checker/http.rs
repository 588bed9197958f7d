// src/checker/http.rs
// =============================================================================
// This module checks if links are alive by making HTTP requests.
//
// Key functionality:
// - One GET request per link (no HEAD shortcut: we want the same answer a
//   browser would get)
// - Exactly HTTP 200 counts as valid; every other status, every transport
//   error and every anchor without href counts as broken
// - Checks run through a bounded stream, so at most N requests are in flight
//   and the results come back in the original order
//
// The request itself sits behind the StatusProbe trait. The real program uses
// HttpProbe (reqwest); tests plug in a probe that answers from a table.
//
// Rust concepts:
// - Traits: an interface the classifier is generic over
// - Streams: futures::StreamExt::buffered for ordered concurrency
// =============================================================================

use super::link::RawLink;
use anyhow::Result;
use futures::stream::{self, StreamExt}; // StreamExt gives us .buffered()
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::num::NonZeroUsize;

/// Something that can tell us the HTTP status a link answers with.
// Only ever used through generics, never as a trait object
#[allow(async_fn_in_trait)]
pub trait StatusProbe {
    /// Requests `link` and returns the final status code.
    ///
    /// Any failure to get a response at all is an error.
    async fn status(&self, link: &str) -> Result<StatusCode>;
}

/// The real probe: a GET request through a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl StatusProbe for HttpProbe {
    async fn status(&self, link: &str) -> Result<StatusCode> {
        // Relative or empty links fail right here with a builder error,
        // which is exactly what we want: they end up broken
        let response = self.client.get(link).send().await?;
        Ok(response.status())
    }
}

/// Links split by whether they answered HTTP 200.
///
/// Both lists keep the order of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub valid: Vec<RawLink>,
    pub broken: Vec<RawLink>,
}

// The outcome for a single link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Valid,
    Broken,
}

/// Checks every link and partitions them into valid and broken.
///
/// Never fails: problems with individual links only make those links broken.
pub async fn classify<P: StatusProbe>(
    probe: &P,
    links: Vec<RawLink>,
    concurrency: NonZeroUsize,
) -> Classification {
    // Create a stream of futures, one per link
    let checks = links.into_iter().map(|link| async move {
        let verdict = check_single_link(probe, &link).await;
        (link, verdict)
    });

    // .buffered(n) runs up to n checks at once but yields results in the
    // same order as the input, unlike buffer_unordered
    let results: Vec<(RawLink, Verdict)> = stream::iter(checks)
        .buffered(concurrency.get())
        .collect()
        .await;

    let mut classification = Classification::default();
    for (link, verdict) in results {
        match verdict {
            Verdict::Valid => classification.valid.push(link),
            Verdict::Broken => classification.broken.push(link),
        }
    }

    tracing::info!(
        valid = classification.valid.len(),
        broken = classification.broken.len(),
        "classified links"
    );
    classification
}

async fn check_single_link<P: StatusProbe>(probe: &P, link: &RawLink) -> Verdict {
    let href = match link {
        RawLink::Present(href) => href,
        RawLink::Absent => {
            tracing::debug!("anchor without href counted as broken");
            return Verdict::Broken;
        }
    };

    match probe.status(href).await {
        Ok(status) if status == StatusCode::OK => {
            tracing::debug!(link = %href, status = status.as_u16(), "valid");
            Verdict::Valid
        }
        Ok(status) => {
            tracing::debug!(link = %href, status = status.as_u16(), "broken");
            Verdict::Broken
        }
        Err(e) => {
            tracing::debug!(link = %href, error = %e, "request failed");
            Verdict::Broken
        }
    }
}
