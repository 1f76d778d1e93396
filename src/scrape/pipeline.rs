// src/scrape/pipeline.rs
use std::{
    sync::{atomic::{AtomicBool, Ordering}, Arc},
    thread,
};

use crate::{
    config::consts::{BALL_BY_BALL_TOKEN, MATCH_CENTRE_PREFIX, SCORECARD_TOKEN},
    config::options::WaitPolicy,
    error::ScrapeError,
    highlights::{decode, sort_highlights_by_over, sort_raw_by_over, HighlightRecord},
    progress::Progress,
    specs::Extractor,
};

use super::source::{LoadState, PageSource};

/// Everything one successful scrape produced.
#[derive(Clone, Debug, Default)]
pub struct ScrapeReport {
    /// URL actually visited (after the scorecard → ballbyball rewrite).
    pub url: String,
    /// Real highlights, sorted by over.
    pub records: Vec<HighlightRecord>,
    /// Raw lines for the same highlights, same order.
    pub raw_lines: Vec<String>,
    /// Extraction error messages seen along the way.
    pub errors: Vec<String>,
    /// Non-fatal hiccups (load timeout, dropped error records).
    pub warnings: Vec<String>,
}

/// The only URL rewrite we do: scorecard pages become ball-by-ball pages.
pub fn ball_by_ball_url(url: &str) -> String {
    url.replacen(SCORECARD_TOKEN, BALL_BY_BALL_TOKEN, 1)
}

/// Launch URLs that point at a match start a scrape straight away.
pub fn should_autofetch(url: &str) -> bool {
    url.contains(MATCH_CENTRE_PREFIX)
}

/// One-scrape-at-a-time flag shared between the UI and its worker.
#[derive(Clone, Debug, Default)]
pub struct InFlight(Arc<AtomicBool>);

/// Held for the lifetime of a scrape; releases the flag on drop.
#[derive(Debug)]
pub struct InFlightTicket(Arc<AtomicBool>);

impl InFlight {
    pub fn new() -> Self { Self::default() }

    pub fn try_begin(&self) -> Option<InFlightTicket> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightTicket(Arc::clone(&self.0)))
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl Drop for InFlightTicket {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Navigate, wait, extract, decode, sort.
///
/// Error pseudo-records are pulled out and reported; they never reach the
/// report's `records`. Zero highlights is `EmptyResult` (a warning), zero
/// highlights with errors is `ExtractionFailure`.
pub fn run(
    input: &str,
    source: &mut dyn PageSource,
    extractor: &dyn Extractor,
    wait: WaitPolicy,
    progress: &mut dyn Progress,
) -> Result<ScrapeReport, ScrapeError> {
    let res = run_inner(input, source, extractor, wait, progress);
    match &res {
        Ok(report) => {
            logf!("Scrape: OK url={} highlights={} errors={}", report.url, report.records.len(), report.errors.len());
            progress.finish(report.records.len());
        }
        Err(e) if e.is_warning() => {
            logw!("Scrape: {}", e);
            progress.finish(0);
        }
        Err(e) => {
            loge!("Scrape: Error: {}", e);
            progress.finish(0);
        }
    }
    res
}

/// `run`, refused with `Busy` while another scrape holds the flag.
pub fn run_guarded(
    guard: &InFlight,
    input: &str,
    source: &mut dyn PageSource,
    extractor: &dyn Extractor,
    wait: WaitPolicy,
    progress: &mut dyn Progress,
) -> Result<ScrapeReport, ScrapeError> {
    let Some(_ticket) = guard.try_begin() else {
        logd!("Scrape: refused, one is already running");
        return Err(ScrapeError::Busy);
    };
    run(input, source, extractor, wait, progress)
}

fn run_inner(
    input: &str,
    source: &mut dyn PageSource,
    extractor: &dyn Extractor,
    wait: WaitPolicy,
    progress: &mut dyn Progress,
) -> Result<ScrapeReport, ScrapeError> {
    let input = input.trim();
    progress.begin(input);

    let url = ball_by_ball_url(input);
    if url != input {
        progress.log(&format!("Modified URL: {url}"));
    }
    logf!("Scrape: Begin url={}", url);

    source.navigate(&url)?;
    progress.log("Scraping & loading…");

    let mut warnings = Vec::new();
    match source.wait_loaded(wait.timeout)? {
        LoadState::Loaded => logd!("Scrape: page loaded"),
        LoadState::TimedOut => {
            let msg = format!(
                "Page did not finish loading within {} ms; extracting what is there",
                wait.timeout.as_millis()
            );
            progress.warn(&msg);
            warnings.push(msg);
        }
        LoadState::NoSignal => {
            progress.log(&format!("No load signal; waiting {} ms", wait.fallback_delay.as_millis()));
            thread::sleep(wait.fallback_delay);
        }
    }

    let markup = source.snapshot()?;
    progress.log("Extracting highlights…");
    let raw = extractor.extract(&markup);
    progress.log(&format!("Extracted {} highlights", raw.len()));

    let mut records = Vec::with_capacity(raw.len());
    let mut raw_lines = Vec::with_capacity(raw.len());
    let mut errors = Vec::new();
    for line in raw {
        let rec = decode(&line);
        if rec.is_error() {
            let msg = format!("Error during extraction: {}", rec.details);
            progress.warn(&msg);
            warnings.push(msg);
            errors.push(rec.details);
        } else {
            records.push(rec);
            raw_lines.push(line);
        }
    }

    if records.is_empty() {
        if !errors.is_empty() {
            return Err(ScrapeError::ExtractionFailure(errors.join("; ")));
        }
        let empty = ScrapeError::EmptyResult;
        progress.warn(&empty.to_string());
        return Err(empty);
    }

    let records = sort_highlights_by_over(records);
    let raw_lines = sort_raw_by_over(raw_lines);
    progress.log("Highlights sorted by over number.");

    Ok(ScrapeReport { url, records, raw_lines, errors, warnings })
}
