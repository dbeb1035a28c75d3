// src/log.rs
//! File logging for the scraper.
//!
//! Everything goes to `<log_dir>/debug.log` through a `tracing` subscriber, so
//! stdout stays reserved for scraped rows. The `logf!`/`logd!`/`logw!`/`loge!`
//! macros are thin aliases over the `tracing` level macros.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::{fs, io};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[doc(hidden)]
pub use tracing;

pub const LOG_FILE: &str = "debug.log";
const DEFAULT_FILTER: &str = "pydoc_scrape=debug";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Install the global subscriber. Later calls are no-ops returning the first path.
pub fn init(dir: &Path) -> io::Result<PathBuf> {
    if let Some(path) = LOG_PATH.get() {
        return Ok(path.clone());
    }
    fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Another subscriber may already be installed (tests); keep it.
    let _ = tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();

    let _ = LOG_GUARD.set(guard);
    let path = dir.join(LOG_FILE);
    let _ = LOG_PATH.set(path.clone());
    Ok(path)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        $crate::log::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::tracing::error!($($arg)*)
    };
}
