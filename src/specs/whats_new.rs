// src/specs/whats_new.rs

use scraper::Html;
use url::Url;

use crate::config::consts::{TOCTREE_CLASS, TOCTREE_ITEM_CLASS, WHATS_NEW_PATH, WHATS_NEW_SECTION_ID};
use crate::core::html::{find, find_all, locate, root, text_of, Attr};
use crate::core::links::{resolve, Link};
use crate::core::sanitize::single_line;
use crate::data::WhatsNewRow;
use crate::error::Result;

pub fn index_url(base: &Url) -> Result<Url> {
    resolve(base, WHATS_NEW_PATH).map(Link::into_url)
}

/// Sub-page links of the index, in list order, resolved against `index_url`.
/// Items whose first `<a>` is missing or has no `href` are skipped.
pub fn entry_links(doc: &Html, index_url: &Url) -> Result<Vec<Link>> {
    let section = locate(
        root(doc),
        "section",
        Attr::Id(WHATS_NEW_SECTION_ID),
        "section#what-s-new-in-python on the What's New index",
    )?;
    let toctree = locate(
        section,
        "div",
        Attr::Class(TOCTREE_CLASS),
        "div.toctree-wrapper in the What's New section",
    )?;

    let mut links = Vec::new();
    for (i, item) in find_all(toctree, "li", Attr::Class(TOCTREE_ITEM_CLASS)).enumerate() {
        let href = find(item, "a", Attr::Any).and_then(|a| a.value().attr("href"));
        let Some(href) = href else {
            logd!("What's New: list item {i} has no link; skipped");
            continue;
        };
        links.push(resolve(index_url, href)?);
    }
    Ok(links)
}

/// Fields of one version page. Either may be missing; then it's `""`.
pub fn parse_entry(doc: &Html, link: Link) -> WhatsNewRow {
    let heading = find(root(doc), "h1", Attr::Any)
        .map(|h1| s!(text_of(h1).trim()))
        .unwrap_or_default();
    let body = find(root(doc), "dl", Attr::Any)
        .map(|dl| single_line(&text_of(dl)))
        .unwrap_or_default();
    WhatsNewRow { link, heading, body }
}
