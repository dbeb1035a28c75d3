// src/core/net.rs
//! Blocking HTTP GET with an optional on-disk response cache.

use reqwest::blocking::Client;
use url::Url;

use crate::config::consts::USER_AGENT;
use crate::config::options::NetOptions;
use crate::error::{Result, ScrapeError};
use crate::store::ResponseStore;

/// A fully read response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub url: Url,
    pub status: u16,
    pub body: Vec<u8>,
    pub from_cache: bool,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8 whatever the server declared; bad bytes become U+FFFD.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ScrapeError::Http { status: self.status, url: self.url.to_string() })
        }
    }
}

/// Something that can GET a URL. `Session` in production, fakes in tests.
pub trait Fetch {
    fn get(&mut self, url: &Url) -> Result<Response>;
}

/// Shared HTTP session: one client, one (optional) cache.
pub struct Session {
    client: Client,
    store: Option<ResponseStore>,
}

impl Session {
    pub fn new(store: Option<ResponseStore>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ScrapeError::Client)?;
        Ok(Self { client, store })
    }

    pub fn from_options(net: &NetOptions) -> Result<Self> {
        let store = net.use_cache.then(|| ResponseStore::new(&net.cache_dir));
        Self::new(store)
    }

}

/// Remove every response cached under `net.cache_dir`, whether or not this run
/// reads the cache. Returns how many entries were dropped.
pub fn clear_cache(net: &NetOptions) -> Result<usize> {
    ResponseStore::new(&net.cache_dir).clear()
}

impl Fetch for Session {
    fn get(&mut self, url: &Url) -> Result<Response> {
        if let Some(store) = &self.store {
            if let Some(hit) = store.load("GET", url) {
                logd!("GET {url} (cached, status {})", hit.status);
                return Ok(hit);
            }
        }

        logf!("GET {url}");
        let network = |source: reqwest::Error| ScrapeError::Network { url: url.to_string(), source };
        let resp = self.client.get(url.clone()).send().map_err(network)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(network)?.to_vec();
        logd!("GET {url} -> {status}, {} bytes", body.len());

        let response = Response { url: url.clone(), status, body, from_cache: false };

        // Failures are never cached.
        if response.is_success() {
            if let Some(store) = &self.store {
                if let Err(e) = store.save("GET", &response) {
                    logw!("Cache: could not store {url}: {e}");
                }
            }
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response {
            url: Url::parse("https://docs.python.org/3/").unwrap(),
            status,
            body: body.to_vec(),
            from_cache: false,
        }
    }

    #[test]
    fn text_is_lossy_utf8() {
        let r = response(200, b"caf\xc3\xa9 \xff");
        assert_eq!(r.text(), "café \u{FFFD}");
    }

    #[test]
    fn error_for_status_carries_code_and_url() {
        assert!(response(204, b"").error_for_status().is_ok());
        match response(404, b"gone").error_for_status() {
            Err(ScrapeError::Http { status, url }) => {
                assert_eq!(status, 404);
                assert_eq!(url, "https://docs.python.org/3/");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn cached_response_is_served_without_network() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResponseStore::new(dir.path());
        // Port 9 (discard) on loopback: a real request here would fail.
        let url = Url::parse("http://127.0.0.1:9/whatsnew/").unwrap();
        store
            .save("GET", &Response { url: url.clone(), status: 200, body: b"<p>hi</p>".to_vec(), from_cache: false })
            .unwrap();

        let mut session = Session::new(Some(store)).unwrap();
        let got = session.get(&url).unwrap();
        assert!(got.from_cache);
        assert_eq!(got.text(), "<p>hi</p>");
    }

    #[test]
    fn clear_cache_empties_the_store_even_when_bypassed() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResponseStore::new(dir.path());
        let url = Url::parse("https://docs.python.org/3/").unwrap();
        store
            .save("GET", &Response { url: url.clone(), status: 200, body: b"x".to_vec(), from_cache: false })
            .unwrap();

        let net = NetOptions {
            cache_dir: dir.path().to_path_buf(),
            use_cache: false,
            clear_cache: true,
            ..NetOptions::default()
        };
        assert!(Session::from_options(&net).is_ok());
        assert_eq!(clear_cache(&net).unwrap(), 1);
        assert!(store.load("GET", &url).is_none());
    }
}
