// src/store.rs
//! On-disk HTTP response cache.
//!
//! One entry per `METHOD URL`, named by the SHA-256 of that string:
//!
//! ```text
//! <dir>/<key>.json   metadata (method, url, status, stored_at)
//! <dir>/<key>.body   raw response bytes
//! ```
//!
//! The body is written before the metadata, so an entry only counts once its
//! `.json` exists. Anything unreadable is treated as a miss: results never
//! depend on what the cache holds.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use url::Url;

use crate::core::net::Response;
use crate::error::Result;

const META_EXT: &str = "json";
const BODY_EXT: &str = "body";

#[derive(Debug, Serialize, Deserialize)]
struct EntryMeta {
    method: String,
    url: String,
    status: u16,
    /// Seconds since the Unix epoch.
    stored_at: u64,
}

#[derive(Clone, Debug)]
pub struct ResponseStore {
    dir: PathBuf,
}

impl ResponseStore {
    /// Nothing touches the disk until the first `save`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key(method: &str, url: &Url) -> String {
        hex::encode(Sha256::digest(join!(method, " ", url.as_str())))
    }

    fn paths(&self, method: &str, url: &Url) -> (PathBuf, PathBuf) {
        let key = Self::key(method, url);
        (
            self.dir.join(format!("{key}.{META_EXT}")),
            self.dir.join(format!("{key}.{BODY_EXT}")),
        )
    }

    pub fn load(&self, method: &str, url: &Url) -> Option<Response> {
        let (meta_path, body_path) = self.paths(method, url);
        let text = match fs::read_to_string(&meta_path) {
            Ok(t) => t,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return None,
            Err(e) => {
                logw!("Cache: unreadable {}: {e}", meta_path.display());
                return None;
            }
        };
        let meta: EntryMeta = match serde_json::from_str(&text) {
            Ok(m) => m,
            Err(e) => {
                logw!("Cache: corrupt {}: {e}", meta_path.display());
                return None;
            }
        };
        if meta.method != method || meta.url != url.as_str() {
            return None;
        }
        let body = match fs::read(&body_path) {
            Ok(b) => b,
            Err(e) => {
                logw!("Cache: missing body {}: {e}", body_path.display());
                return None;
            }
        };
        Some(Response { url: url.clone(), status: meta.status, body, from_cache: true })
    }

    pub fn save(&self, method: &str, response: &Response) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let (meta_path, body_path) = self.paths(method, &response.url);
        let stored_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let meta = EntryMeta {
            method: s!(method),
            url: s!(response.url.as_str()),
            status: response.status,
            stored_at,
        };
        fs::write(&body_path, &response.body)?;
        fs::write(&meta_path, serde_json::to_vec_pretty(&meta)?)?;
        Ok(())
    }

    /// Remove every entry. Files that are not cache entries are left alone.
    pub fn clear(&self) -> Result<usize> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(it) => it,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        let mut removed = 0;
        for entry in entries {
            let path = entry?.path();
            match path.extension().and_then(|e| e.to_str()) {
                Some(META_EXT) => {
                    fs::remove_file(&path)?;
                    removed += 1;
                }
                Some(BODY_EXT) => fs::remove_file(&path)?,
                _ => {}
            }
        }
        logf!("Cache: cleared {removed} entries from {}", self.dir.display());
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    fn ok(u: &Url, body: &str) -> Response {
        Response { url: u.clone(), status: 200, body: body.as_bytes().to_vec(), from_cache: false }
    }

    #[test]
    fn keyed_by_method_and_url() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResponseStore::new(dir.path());
        let a = url("https://docs.python.org/3/");
        let b = url("https://docs.python.org/3/download.html");
        store.save("GET", &ok(&a, "index")).unwrap();

        let hit = store.load("GET", &a).unwrap();
        assert!(hit.from_cache);
        assert_eq!(hit.body, b"index");
        assert!(store.load("GET", &b).is_none());
        assert!(store.load("HEAD", &a).is_none());
    }

    #[test]
    fn later_save_replaces_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResponseStore::new(dir.path());
        let a = url("https://docs.python.org/3/");
        store.save("GET", &ok(&a, "old")).unwrap();
        store.save("GET", &ok(&a, "new")).unwrap();
        assert_eq!(store.load("GET", &a).unwrap().body, b"new");
    }

    #[test]
    fn corrupt_metadata_is_a_miss() {
        let dir = tempfile::tempdir().unwrap();
        let store = ResponseStore::new(dir.path());
        let a = url("https://docs.python.org/3/");
        store.save("GET", &ok(&a, "index")).unwrap();
        let (meta, _) = store.paths("GET", &a);
        fs::write(meta, "{not json").unwrap();
        assert!(store.load("GET", &a).is_none());
    }

    #[test]
    fn clear_removes_entries_only() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("cache");
        let store = ResponseStore::new(&cache);
        assert_eq!(store.clear().unwrap(), 0); // no directory yet

        store.save("GET", &ok(&url("https://a.example/"), "a")).unwrap();
        store.save("GET", &ok(&url("https://b.example/"), "b")).unwrap();
        fs::write(cache.join("notes.txt"), "keep").unwrap();

        assert_eq!(store.clear().unwrap(), 2);
        assert!(store.load("GET", &url("https://a.example/")).is_none());
        assert!(cache.join("notes.txt").exists());
    }
}
