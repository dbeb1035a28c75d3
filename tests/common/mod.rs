// tests/common/mod.rs
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io;

use pydoc_scrape::core::net::{Fetch, Response};
use pydoc_scrape::progress::Progress;
use pydoc_scrape::{Result, ScrapeError};
use url::Url;

pub const BASE: &str = "https://docs.python.org/3/";

pub fn base() -> Url {
    Url::parse(BASE).unwrap()
}

/// Serves canned pages by absolute URL; anything else is a 404.
/// URLs marked with `fail` error out like a dropped connection.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, (u16, Vec<u8>)>,
    failing: HashSet<String>,
    pub requests: Vec<String>,
}

impl FakeSite {
    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), (200, html.as_bytes().to_vec()));
        self
    }

    pub fn raw(mut self, url: &str, status: u16, body: &[u8]) -> Self {
        self.pages.insert(url.to_string(), (status, body.to_vec()));
        self
    }

    pub fn fail(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }
}

impl Fetch for FakeSite {
    fn get(&mut self, url: &Url) -> Result<Response> {
        self.requests.push(url.to_string());
        if self.failing.contains(url.as_str()) {
            return Err(ScrapeError::Io(io::Error::other("connection reset")));
        }
        let (status, body) = self
            .pages
            .get(url.as_str())
            .cloned()
            .unwrap_or((404, b"<html><body><h1>Not Found</h1></body></html>".to_vec()));
        Ok(Response { url: url.clone(), status, body, from_cache: false })
    }
}

#[derive(Default)]
pub struct Recorder {
    pub total: Option<usize>,
    pub done: Vec<String>,
    pub lines: Vec<String>,
    pub finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn log(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
    fn item_done(&mut self, label: &str) {
        self.done.push(label.to_string());
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}
