// src/config/options.rs
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub filter: FilterOptions,
    pub display: DisplayOptions,
    pub export: ExportOptions,
}

/// Which event kinds are shown. Passed by value into the table; never read ad hoc.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterOptions {
    pub wickets: bool,
    pub fours: bool,
    pub sixes: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self { wickets: true, fours: true, sixes: true }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DisplayOptions {
    /// Render the dismissed batsman's name in Unicode bold.
    pub bold_names: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub url: String,
    pub wait: WaitPolicy,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { url: s!(), wait: WaitPolicy::default() }
    }
}

/// How long to wait for the page before extracting.
///
/// `timeout` bounds the wait on a real load-completion signal.
/// `fallback_delay` is slept instead when the source has no such signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WaitPolicy {
    pub timeout: Duration,
    pub fallback_delay: Duration,
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(LOAD_TIMEOUT_MS),
            fallback_delay: Duration::from_millis(FALLBACK_DELAY_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Same text the Copy button produces.
    #[default]
    Tsv,
    Csv,
}

impl ExportFormat {
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => COPY_SEP }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
}
