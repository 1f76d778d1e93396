// src/scrape/source.rs
// Where page markup comes from, and how we know it's ready.

use std::{fs, path::PathBuf, time::Duration};

use crate::core::net::{self, GetError};
use crate::error::ScrapeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// The source reported the page complete.
    Loaded,
    /// We waited the full timeout without a completion signal.
    TimedOut,
    /// This source can't tell; the caller falls back to a fixed delay.
    NoSignal,
}

/// A navigable page: go to a URL, wait for it, read its markup.
pub trait PageSource {
    fn navigate(&mut self, url: &str) -> Result<(), ScrapeError>;
    fn wait_loaded(&mut self, timeout: Duration) -> Result<LoadState, ScrapeError>;
    /// Markup as it is right now. Empty if nothing arrived.
    fn snapshot(&self) -> Result<String, ScrapeError>;
}

/// Live page over HTTPS. The response body completing is the load signal.
#[derive(Debug, Default)]
pub struct HttpPage {
    url: String,
    body: Option<String>,
}

impl HttpPage {
    pub fn new() -> Self { Self::default() }
}

impl PageSource for HttpPage {
    fn navigate(&mut self, url: &str) -> Result<(), ScrapeError> {
        self.url = s!(url);
        self.body = None;
        Ok(())
    }

    fn wait_loaded(&mut self, timeout: Duration) -> Result<LoadState, ScrapeError> {
        match net::http_get(&self.url, timeout) {
            Ok(body) => {
                logd!("Net: {} bytes from {}", body.len(), self.url);
                self.body = Some(body);
                Ok(LoadState::Loaded)
            }
            Err(GetError::TimedOut) => Ok(LoadState::TimedOut),
            Err(GetError::Failed(msg)) => Err(ScrapeError::Fetch { url: self.url.clone(), msg }),
        }
    }

    fn snapshot(&self) -> Result<String, ScrapeError> {
        Ok(self.body.clone().unwrap_or_default())
    }
}

/// Saved page on disk (`page.html` or `file:///…/page.html`).
#[derive(Debug, Default)]
pub struct FilePage {
    path: PathBuf,
    markup: String,
}

impl FilePage {
    pub fn new() -> Self { Self::default() }
}

impl PageSource for FilePage {
    fn navigate(&mut self, url: &str) -> Result<(), ScrapeError> {
        self.path = PathBuf::from(url.strip_prefix("file://").unwrap_or(url));
        self.markup = fs::read_to_string(&self.path).map_err(|source| ScrapeError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        Ok(())
    }

    fn wait_loaded(&mut self, _timeout: Duration) -> Result<LoadState, ScrapeError> {
        Ok(LoadState::Loaded)
    }

    fn snapshot(&self) -> Result<String, ScrapeError> {
        Ok(self.markup.clone())
    }
}

/// Pick a source by the shape of the input.
pub fn source_for(input: &str) -> Box<dyn PageSource + Send> {
    let lower = input.trim_start().to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Box::new(HttpPage::new())
    } else {
        Box::new(FilePage::new())
    }
}
