// src/checker/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Every <a> element produces exactly one RawLink, in document order. We do
// not filter out mailto:, fragments or relative links: the point is to audit
// what the page actually contains.
// =============================================================================

use super::link::RawLink;
use scraper::{Html, Selector};
use url::Url;

// Extracts the href of every <a> element
//
// Parameters:
//   html: the HTML content to parse
//   base: when Some, relative hrefs are resolved against it;
//         when None, hrefs are kept exactly as written
//
// Example:
//   html = "<a href='/docs'>Docs</a><a>no target</a>"
//   base = None
//   result = [Present("/docs"), Absent]
pub fn extract_links(html: &str, base: Option<&Url>) -> Vec<RawLink> {
    let document = Html::parse_document(html);

    // Note: "a", not "a[href]" - anchors without href are reported as Absent.
    // The selector is a constant, so parsing it cannot fail at runtime.
    let selector = Selector::parse("a").expect("'a' is a valid CSS selector");

    document
        .select(&selector)
        .map(|element| match element.value().attr("href") {
            Some(href) => RawLink::Present(resolve(base, href)),
            None => RawLink::Absent,
        })
        .collect()
}

// Resolves `href` against `base` when one is given
//
// Hrefs that can't be joined (e.g. "http://[broken") are kept verbatim so the
// checker still sees and reports them.
fn resolve(base: Option<&Url>, href: &str) -> String {
    match base {
        Some(base) => match base.join(href) {
            Ok(url) => url.to_string(),
            Err(_) => href.to_string(),
        },
        None => href.to_string(),
    }
}
