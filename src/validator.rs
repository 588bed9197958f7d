// src/validator.rs
// =============================================================================
// Decides whether the target URL is good enough to start a run.
//
// A URL is accepted only when it has both a scheme and a host:
//   "https://example.com/path" -> accepted
//   "example.com"              -> rejected (no scheme)
//   "mailto:me@example.com"    -> rejected (no host)
//
// This check is purely local: no network access happens here.
// =============================================================================

use url::Url;

/// Returns true when `url` parses as an absolute URL with a non-empty scheme
/// and a non-empty host.
pub fn is_valid_url(url: &str) -> bool {
    // Url::parse fails on anything that isn't an absolute URL,
    // so a parse error simply means "not valid"
    match Url::parse(url) {
        Ok(parsed) => {
            !parsed.scheme().is_empty()
                && parsed.host_str().map_or(false, |host| !host.is_empty())
        }
        Err(_) => false,
    }
}
