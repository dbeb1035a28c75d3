// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::{AppOptions, Mode},
    core::net::Fetch,
    data::DataSet,
    error::Result,
    progress::Progress,
    scrape,
};

/// What a mode produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Rows(DataSet),
    Saved(PathBuf),
}

/// Top-level runner: dispatch on mode and run.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    fetch: &mut dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<Outcome> {
    let base = &opts.net.base_url;
    logf!("Run: mode={} base={base}", opts.scrape.mode);

    match opts.scrape.mode {
        Mode::WhatsNew => scrape::collect_whats_new(fetch, base, progress)
            .map(|rows| Outcome::Rows(DataSet::from_rows(&rows))),
        Mode::LatestVersions => scrape::collect_latest_versions(fetch, base)
            .map(|rows| Outcome::Rows(DataSet::from_rows(&rows))),
        Mode::Download => scrape::download_archive(fetch, base, &opts.downloads_dir, progress)
            .map(Outcome::Saved),
    }
}
