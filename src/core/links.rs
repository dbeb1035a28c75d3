// src/core/links.rs
use std::fmt;

use url::Url;

use crate::error::{Result, ScrapeError};

/// A resolved href: the parsed `Url` to fetch, and the text to print.
///
/// An href that was already absolute prints exactly as written in the page;
/// anything resolved against a base prints as the joined URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    url: Url,
    text: String,
}

impl Link {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_url(self) -> Url {
        self.url
    }
}

impl From<Url> for Link {
    fn from(url: Url) -> Self {
        let text = s!(url.as_str());
        Self { url, text }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Resolve an href found in a page against that page's URL.
/// Relative, root-relative, scheme-relative and absolute hrefs all come back
/// absolute; an empty href resolves to `base` itself (minus any fragment).
pub fn resolve(base: &Url, href: &str) -> Result<Link> {
    if let Ok(url) = Url::parse(href) {
        return Ok(Link { url, text: s!(href) });
    }
    base.join(href).map(Link::from).map_err(|source| ScrapeError::Url {
        input: s!(href),
        source,
    })
}
