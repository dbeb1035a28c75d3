// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use url::Url;

use crate::config::consts::{HTTP_CACHE_SUBDIR, MAIN_DOC_URL, STORE_DIR};
use crate::config::options::{AppOptions, ExportOptions, Mode, NetOptions, OutputFormat, ScrapeOptions};
use crate::core::net::{self, Session};
use crate::error::Result;
use crate::export;
use crate::progress::Progress;
use crate::runner::{self, Outcome};

/// Scrape facts from the Python documentation site.
#[derive(Parser, Debug)]
#[command(name = "pydoc_scrape", version, about)]
pub struct Args {
    /// What to scrape
    #[arg(value_enum)]
    pub mode: Mode,

    /// Clear the HTTP response cache before running
    #[arg(short, long)]
    pub clear_cache: bool,

    /// Always go to the network; neither read nor write the cache
    #[arg(long)]
    pub no_cache: bool,

    /// Documentation root every page is resolved against
    #[arg(long, env = "PYDOC_BASE_URL", default_value = MAIN_DOC_URL)]
    pub base_url: Url,

    #[arg(long, default_value_os_t = PathBuf::from(STORE_DIR).join(HTTP_CACHE_SUBDIR))]
    pub cache_dir: PathBuf,

    /// Where `download` saves the archive [default: downloads/ beside the executable]
    #[arg(long)]
    pub downloads_dir: Option<PathBuf>,

    /// Output format for scraped rows
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Print a header row first
    #[arg(long)]
    pub include_headers: bool,

    /// Directory for debug.log
    #[arg(long, default_value = STORE_DIR)]
    pub log_dir: PathBuf,
}

impl Args {
    pub fn into_options(self) -> AppOptions {
        let defaults = AppOptions::default();
        AppOptions {
            scrape: ScrapeOptions { mode: self.mode },
            net: NetOptions {
                base_url: self.base_url,
                cache_dir: self.cache_dir,
                use_cache: !self.no_cache,
                clear_cache: self.clear_cache,
            },
            export: ExportOptions {
                format: self.format,
                include_headers: self.include_headers,
            },
            downloads_dir: self.downloads_dir.unwrap_or(defaults.downloads_dir),
            log_dir: self.log_dir,
        }
    }
}

/// Progress bar on stderr; status lines go to stdout.
#[derive(Default)]
pub struct CliProgress {
    bar: Option<ProgressBar>,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        self.bar = Some(bar);
    }

    fn log(&mut self, msg: &str) {
        match &self.bar {
            Some(bar) => bar.println(msg),
            None => println!("{msg}"),
        }
    }

    fn item_done(&mut self, label: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(s!(label));
            bar.inc(1);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

pub fn run(opts: &AppOptions) -> Result<()> {
    if opts.net.clear_cache {
        let removed = net::clear_cache(&opts.net)?;
        logf!("Cache: --clear-cache removed {removed} entries");
    }
    let mut session = Session::from_options(&opts.net)?;

    let mut progress = CliProgress::default();
    let outcome = runner::run(opts, &mut session, Some(&mut progress))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match outcome {
        Outcome::Rows(ds) => export::write_dataset(&mut out, &ds, &opts.export)?,
        Outcome::Saved(path) => {
            writeln!(out, "Archive saved to {}", path.display())?;
        }
    }
    Ok(())
}
