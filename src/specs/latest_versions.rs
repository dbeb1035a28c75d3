// src/specs/latest_versions.rs

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;
use url::Url;

use crate::config::consts::{ALL_VERSIONS_MARKER, SIDEBAR_CLASS, VERSION_STATUS_PATTERN};
use crate::core::html::{find_all, locate, root, text_of, Attr};
use crate::core::links::resolve;
use crate::data::VersionRow;
use crate::error::{Result, ScrapeError};

static VERSION_STATUS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(VERSION_STATUS_PATTERN).expect("version pattern compiles"));

/// Rows of the sidebar's "All versions" list, links resolved against `base`.
pub fn parse(doc: &Html, base: &Url) -> Result<Vec<VersionRow>> {
    let sidebar = locate(
        root(doc),
        "div",
        Attr::Class(SIDEBAR_CLASS),
        "div.sphinxsidebarwrapper (version sidebar)",
    )?;

    let list = find_all(sidebar, "ul", Attr::Any)
        .find(|ul| text_of(*ul).contains(ALL_VERSIONS_MARKER))
        .ok_or_else(|| ScrapeError::not_found("sidebar list containing \"All versions\""))?;

    let anchors: Vec<_> = find_all(list, "a", Attr::Any).collect();
    if anchors.is_empty() {
        return Err(ScrapeError::not_found("links in the \"All versions\" list"));
    }

    anchors
        .into_iter()
        .map(|a| {
            let href = a.value().attr("href").unwrap_or_default();
            let link = resolve(base, href)?;
            let (version, status) = split_label(&text_of(a));
            Ok(VersionRow { link, version, status })
        })
        .collect()
}

/// `"Python 3.9 (stable)"` → `("3.9", "stable")`. Labels that don't fit the
/// pattern come back whole, with an empty status.
pub fn split_label(text: &str) -> (String, String) {
    match VERSION_STATUS.captures(text) {
        Some(caps) => (s!(&caps["version"]), s!(&caps["status"])),
        None => (s!(text), s!()),
    }
}
