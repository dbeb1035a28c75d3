// src/scrape/scrape.rs
use std::path::{Path, PathBuf};

use scraper::Html;
use url::Url;

use crate::{
    core::{links::Link, net::Fetch},
    data::{VersionRow, WhatsNewRow},
    error::Result,
    file,
    progress::Progress,
    specs::{download, latest_versions, whats_new},
};

/// GET a page and parse it as HTML.
///
/// The status is *not* checked: an error page is parsed like any other, and a
/// missing structure then surfaces from the page parser that needed it.
pub fn fetch_document(fetch: &mut dyn Fetch, url: &Url) -> Result<Html> {
    let resp = fetch.get(url)?;
    if !resp.is_success() {
        logw!("GET {url} returned {}; parsing the body anyway", resp.status);
    }
    Ok(Html::parse_document(&resp.text()))
}

/// One row per "What's New" document: index page, then one request per entry.
pub fn collect_whats_new(
    fetch: &mut dyn Fetch,
    base: &Url,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<WhatsNewRow>> {
    let index_url = whats_new::index_url(base)?;
    let links = {
        let doc = fetch_document(fetch, &index_url)?;
        whats_new::entry_links(&doc, &index_url)?
    };
    logf!("What's New: {} entries on {index_url}", links.len());

    if let Some(p) = progress.as_deref_mut() {
        p.begin(links.len());
    }

    // A failed sub-page still ends the progress display before the error surfaces.
    let rows = fetch_entries(fetch, links, progress.as_deref_mut());
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    rows
}

fn fetch_entries<'p>(
    fetch: &mut dyn Fetch,
    links: Vec<Link>,
    mut progress: Option<&mut (dyn Progress + 'p)>,
) -> Result<Vec<WhatsNewRow>> {
    let mut rows = Vec::with_capacity(links.len());
    for link in links {
        let doc = fetch_document(fetch, link.url())?;
        let row = whats_new::parse_entry(&doc, link);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(row.link.as_str());
        }
        rows.push(row);
    }
    Ok(rows)
}

/// The sidebar's "All versions" list on the base page. Single request.
pub fn collect_latest_versions(fetch: &mut dyn Fetch, base: &Url) -> Result<Vec<VersionRow>> {
    let doc = fetch_document(fetch, base)?;
    let rows = latest_versions::parse(&doc, base)?;
    logf!("Latest versions: {} rows", rows.len());
    Ok(rows)
}

/// Find the A4 PDF archive on the downloads page and save it into `dir`.
/// Returns the written path; an existing file of the same name is replaced.
pub fn download_archive(
    fetch: &mut dyn Fetch,
    base: &Url,
    dir: &Path,
    mut progress: Option<&mut dyn Progress>,
) -> Result<PathBuf> {
    let page_url = download::downloads_url(base)?;
    let archive_url = {
        let doc = fetch_document(fetch, &page_url)?;
        download::archive_link(&doc, &page_url)?
    };
    let name = file::archive_file_name(&archive_url);

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Archive URL: {archive_url}"));
    }
    logf!("Download: {archive_url} -> {}", dir.join(&name).display());

    file::ensure_directory(dir)?;
    let resp = fetch.get(archive_url.url())?.error_for_status()?;
    let path = file::write_bytes(dir, &name, &resp.body)?;

    logf!("Download: wrote {} bytes to {}", resp.body.len(), path.display());
    Ok(path)
}
