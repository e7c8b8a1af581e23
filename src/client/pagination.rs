//! Link-based pagination for list endpoints
//!
//! List endpoints return a page of `items` plus `_links.next.href` pointing at
//! the following page. The client keeps requesting until no next link remains.

use serde::Deserialize;

/// Upper bound on pages followed for a single listing
pub const MAX_PAGES: usize = 100;

/// One page of a list endpoint response
#[derive(Debug, Deserialize)]
pub struct PagedItems<T> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,

    /// Navigation links
    #[serde(default, rename = "_links")]
    pub links: Option<PageLinks>,
}

/// Navigation links attached to a page
#[derive(Debug, Default, Deserialize)]
pub struct PageLinks {
    #[serde(default)]
    pub next: Option<Link>,
}

/// A single hypermedia link
#[derive(Debug, Deserialize)]
pub struct Link {
    pub href: String,
}

impl<T> PagedItems<T> {
    /// URL of the next page, if any.
    pub fn next_href(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|l| l.next.as_ref())
            .map(|n| n.href.as_str())
            .filter(|href| !href.is_empty())
    }
}
