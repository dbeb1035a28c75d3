// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::DOWNLOADS_SUBDIR;
use crate::core::links::Link;
use crate::error::{Result, ScrapeError};

/// `downloads/` next to the running executable; `./downloads` if that can't be found.
pub fn default_downloads_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join(DOWNLOADS_SUBDIR)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::other(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Last `/` segment of the link text, after trailing slashes are stripped.
/// `https://host/a/b-pdf-a4.zip` → `b-pdf-a4.zip`
pub fn archive_file_name(link: &Link) -> String {
    let trimmed = link.as_str().trim_end_matches('/');
    s!(trimmed.rsplit('/').next().unwrap_or(trimmed))
}

/// Write `bytes` to `dir/name`, replacing any file already there.
pub fn write_bytes(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf> {
    ensure_directory(dir)?;
    let path = dir.join(name);
    fs::write(&path, bytes)?;
    Ok(path)
}
