// src/specs/mod.rs
//! # Page specs
//!
//! One module per documentation page. Each spec knows *where the facts live in
//! the HTML* and how to pull them out of an already parsed [`scraper::Html`].
//!
//! ## What lives here
//! - Pure extraction over a parsed document: structure lookups through
//!   `core::html`, link resolution through `core::links`, text cleanup through
//!   `core::sanitize`.
//! - The page URLs, derived from the site base URL.
//!
//! ## What does **not** live here
//! - Network access and caching (`core::net`, `store`).
//! - Iterating over sub-pages, progress, writing files (`scrape`).
//! - Printing (`export`).
//!
//! ## Conventions
//! - A missing *required* structure is `ScrapeError::StructureNotFound`, raised
//!   where the lookup happens. Optional fields fall back to empty strings.
//! - Every link leaving a spec is an absolute `Link`: fetchable `Url`, and the
//!   href text itself when the page already wrote it absolute.
//! - Specs are testable offline against inline HTML fixtures.
//!
//! ## Pages
//! - `whats_new`: `whatsnew/` index links and the per-version sub-pages.
//! - `latest_versions`: the "All versions" list in the sidebar of the base page.
//! - `download`: the A4 PDF archive link in the `download.html` table.
pub mod download;
pub mod latest_versions;
pub mod whats_new;
