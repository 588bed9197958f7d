// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - link: The RawLink type (an href, or the lack of one)
// - html: Extracts links from HTML pages
// - fetch: Downloads the target page and extracts its links
// - http: Requests each link and sorts it into valid or broken
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

mod fetch;
mod html;
mod http;
mod link;

// Re-export public items from submodules
// This lets users write `checker::classify()` instead of
// `checker::http::classify()`
pub use fetch::{fetch_links, fetch_page};
pub use html::extract_links;
pub use http::{classify, Classification, HttpProbe, StatusProbe};
pub use link::RawLink;
