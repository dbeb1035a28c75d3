// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Debug, Error)]
pub enum ScrapeError {
    /// A required piece of page structure is missing. Carries what was sought.
    #[error("structure not found: {0}")]
    StructureNotFound(String),

    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("cannot resolve URL {input:?}")]
    Url {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("response cache entry is unreadable")]
    Cache(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub fn not_found(what: impl Into<String>) -> Self {
        ScrapeError::StructureNotFound(what.into())
    }

    pub fn is_structure_not_found(&self) -> bool {
        matches!(self, ScrapeError::StructureNotFound(_))
    }
}
