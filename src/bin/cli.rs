// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::WrapErr;

use pydoc_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let opts = cli::Args::parse().into_options();
    if let Err(e) = log::init(&opts.log_dir) {
        eprintln!("Warning: file logging disabled: {e}");
    }

    let mode = opts.scrape.mode;
    cli::run(&opts)
        .inspect_err(|e| pydoc_scrape::loge!("Run: mode={mode} failed: {e}"))
        .wrap_err_with(|| format!("{mode} failed"))
}
