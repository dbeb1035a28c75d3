// src/config/consts.rs

// Site
pub const MAIN_DOC_URL: &str = "https://docs.python.org/3/";
pub const WHATS_NEW_PATH: &str = "whatsnew/";
pub const DOWNLOADS_PATH: &str = "download.html";

// What's New index
pub const WHATS_NEW_SECTION_ID: &str = "what-s-new-in-python";
pub const TOCTREE_CLASS: &str = "toctree-wrapper";
pub const TOCTREE_ITEM_CLASS: &str = "toctree-l1";

// Version sidebar
pub const SIDEBAR_CLASS: &str = "sphinxsidebarwrapper";
pub const ALL_VERSIONS_MARKER: &str = "All versions";
pub const VERSION_STATUS_PATTERN: &str = r"Python (?P<version>\d\.\d+) \((?P<status>.*)\)";

// Downloads table
pub const MAIN_ROLE: &str = "main";
pub const DOWNLOADS_TABLE_CLASS: &str = "docutils";
pub const PDF_A4_ZIP_PATTERN: &str = r".+pdf-a4\.zip$";

// Local store
pub const STORE_DIR: &str = ".store";
pub const HTTP_CACHE_SUBDIR: &str = "http_cache";
pub const DOWNLOADS_SUBDIR: &str = "downloads";

// Net
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
