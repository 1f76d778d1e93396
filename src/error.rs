// src/error.rs
use thiserror::Error;

/// Everything that can go wrong in one scrape/copy cycle.
/// None of these are fatal; callers degrade and report.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("fetch failed for {url}: {msg}")]
    Fetch { url: String, msg: String },

    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error during extraction: {0}")]
    ExtractionFailure(String),

    #[error("no highlights found; the page might still be loading or selectors may need updating")]
    EmptyResult,

    #[error("failed to copy table: {0}")]
    ClipboardWriteFailure(String),

    #[error("a scrape is already in progress")]
    Busy,
}

impl ScrapeError {
    /// Warnings are reported, not treated as failures.
    pub fn is_warning(&self) -> bool {
        matches!(self, ScrapeError::EmptyResult)
    }
}
