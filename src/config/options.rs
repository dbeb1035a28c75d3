// src/config/options.rs
use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use url::Url;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub net: NetOptions,
    pub export: ExportOptions,
    /// Where `download` mode writes the archive.
    pub downloads_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            net: NetOptions::default(),
            export: ExportOptions::default(),
            downloads_dir: crate::file::default_downloads_dir(),
            log_dir: PathBuf::from(STORE_DIR),
        }
    }
}

/// The fixed set of scraping routines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Title and editors of every "What's New" document
    #[default]
    WhatsNew,
    /// Documentation versions and their status from the sidebar
    LatestVersions,
    /// Save the A4 PDF documentation archive
    Download,
}

impl Mode {
    pub fn name(self) -> &'static str {
        match self {
            Mode::WhatsNew => "whats-new",
            Mode::LatestVersions => "latest-versions",
            Mode::Download => "download",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub mode: Mode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    /// Root of the documentation site; every page path is joined onto it.
    pub base_url: Url,
    pub cache_dir: PathBuf,
    pub use_cache: bool,
    /// Drop every cached response before the mode runs.
    pub clear_cache: bool,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            base_url: Url::parse(MAIN_DOC_URL).expect("MAIN_DOC_URL is a valid absolute URL"),
            cache_dir: PathBuf::from(STORE_DIR).join(HTTP_CACHE_SUBDIR),
            use_cache: true,
            clear_cache: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fields joined by a single space, one row per line
    #[default]
    Plain,
    Csv,
    Tsv,
    /// Aligned columns
    Table,
}

impl OutputFormat {
    pub fn delim(self) -> Option<char> {
        match self {
            OutputFormat::Csv => Some(','),
            OutputFormat::Tsv => Some('\t'),
            OutputFormat::Plain | OutputFormat::Table => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: OutputFormat,
    pub include_headers: bool,
}
