// src/specs/download.rs

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use url::Url;

use crate::config::consts::{DOWNLOADS_PATH, DOWNLOADS_TABLE_CLASS, MAIN_ROLE, PDF_A4_ZIP_PATTERN};
use crate::core::html::{locate, root, Attr};
use crate::core::links::{resolve, Link};
use crate::error::Result;

static PDF_A4_ZIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PDF_A4_ZIP_PATTERN).expect("archive pattern compiles"));

pub fn downloads_url(base: &Url) -> Result<Url> {
    resolve(base, DOWNLOADS_PATH).map(Link::into_url)
}

/// Absolute link to the A4 PDF zip listed in the downloads table.
pub fn archive_link(doc: &Html, page_url: &Url) -> Result<Link> {
    let main = locate(root(doc), "div", Attr::Role(MAIN_ROLE), "div[role=main] on the downloads page")?;
    let table = locate(
        main,
        "table",
        Attr::Class(DOWNLOADS_TABLE_CLASS),
        "table.docutils in the downloads block",
    )?;
    let link = locate(
        table,
        "a",
        Attr::HrefMatches(&*PDF_A4_ZIP),
        "link to a *pdf-a4.zip archive in the downloads table",
    )?;
    // The predicate only matches elements that carry an href.
    let href = link.value().attr("href").unwrap_or_default();
    resolve(page_url, href)
}
