// src/scrape/mod.rs
mod scrape;

pub use scrape::collect_latest_versions;
pub use scrape::collect_whats_new;
pub use scrape::download_archive;
pub use scrape::fetch_document;
