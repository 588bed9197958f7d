// src/checker/link.rs
// =============================================================================
// The value we pull out of each <a> element.
//
// HTML parsers hand back "maybe an attribute" for href. Instead of turning a
// missing href into a fake string, we keep the difference in the type:
//
//   <a href="/docs">  -> RawLink::Present("/docs")
//   <a href="">       -> RawLink::Present("")
//   <a>               -> RawLink::Absent
//
// Code that wants to request a link has to match on this and decide what an
// absent link means, instead of stumbling over an empty string.
// =============================================================================

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawLink {
    /// The href value exactly as written in the page
    Present(String),
    /// The anchor had no href attribute (serialized as null)
    Absent,
}

impl RawLink {
    /// Returns the href text, or None for an anchor without href.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawLink::Present(href) => Some(href),
            RawLink::Absent => None,
        }
    }
}

impl From<&str> for RawLink {
    fn from(href: &str) -> Self {
        RawLink::Present(href.to_string())
    }
}

// Absent links are written to the output files as empty lines
impl fmt::Display for RawLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().unwrap_or(""))
    }
}
