// src/checker/fetch.rs
// =============================================================================
// Downloads the target page and turns it into a list of raw links.
//
// A failed download is an error the caller can see (FetchError), not an
// empty list, so "the page has no links" and "the page could not be
// fetched" are reported differently.
// =============================================================================

use super::html::extract_links;
use super::link::RawLink;
use crate::error::FetchError;
use reqwest::Client;
use url::Url;

/// Fetches a web page and returns its HTML content.
///
/// Any non-2xx status is treated as a failure.
pub async fn fetch_page(client: &Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let html = response.text().await?;
    Ok(html)
}

/// Fetches `url` and returns the href of every anchor on it.
///
/// With `resolve_relative`, relative hrefs are joined onto `url`.
pub async fn fetch_links(
    client: &Client,
    url: &str,
    resolve_relative: bool,
) -> Result<Vec<RawLink>, FetchError> {
    tracing::info!(url, "fetching page");

    let html = fetch_page(client, url).await.map_err(|e| {
        tracing::warn!(url, error = %e, "page fetch failed");
        e
    })?;

    let base = if resolve_relative {
        Url::parse(url).ok()
    } else {
        None
    };

    let links = extract_links(&html, base.as_ref());
    tracing::info!(url, count = links.len(), "extracted links");
    Ok(links)
}
