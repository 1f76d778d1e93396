// tests/pipeline.rs
use std::time::{Duration, Instant};

use kncb_highlights::config::options::WaitPolicy;
use kncb_highlights::error::ScrapeError;
use kncb_highlights::highlights::encode_extraction_error;
use kncb_highlights::progress::MemoryProgress;
use kncb_highlights::scrape::{
    ball_by_ball_url, run, run_guarded, should_autofetch, source_for, InFlight, LoadState, PageSource,
};
use kncb_highlights::specs::{ballbyball::BallByBall, Extractor};

const SCORECARD: &str = "https://matchcentre.kncb.nl/match/134453-19175180/scorecard/?period=2783497";

struct FakePage {
    state: LoadState,
    visited: Vec<String>,
}

impl FakePage {
    fn new(state: LoadState) -> Self {
        Self { state, visited: Vec::new() }
    }
}

impl PageSource for FakePage {
    fn navigate(&mut self, url: &str) -> Result<(), ScrapeError> {
        self.visited.push(url.to_string());
        Ok(())
    }
    fn wait_loaded(&mut self, _timeout: Duration) -> Result<LoadState, ScrapeError> {
        Ok(self.state)
    }
    fn snapshot(&self) -> Result<String, ScrapeError> {
        Ok(String::from("<html></html>"))
    }
}

struct Canned(Vec<String>);

impl Canned {
    fn of(lines: &[&str]) -> Self {
        Canned(lines.iter().map(|s| s.to_string()).collect())
    }
}

impl Extractor for Canned {
    fn extract(&self, _markup: &str) -> Vec<String> {
        self.0.clone()
    }
}

fn quick() -> WaitPolicy {
    WaitPolicy { timeout: Duration::from_millis(50), fallback_delay: Duration::from_millis(30) }
}

fn fixture_path() -> String {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/ballbyball.html").to_string()
}

#[test]
fn scorecard_becomes_ballbyball_once() {
    assert_eq!(
        ball_by_ball_url(SCORECARD),
        "https://matchcentre.kncb.nl/match/134453-19175180/ballbyball/?period=2783497"
    );
    assert_eq!(ball_by_ball_url("a/scorecard/scorecard"), "a/ballbyball/scorecard");
    assert_eq!(ball_by_ball_url("https://example.org/x"), "https://example.org/x");
}

#[test]
fn autofetch_only_for_match_pages() {
    assert!(should_autofetch(SCORECARD));
    assert!(!should_autofetch("https://matchcentre.kncb.nl/"));
    assert!(!should_autofetch("https://example.org/match"));
}

#[test]
fn run_visits_rewritten_url_and_sorts() {
    let mut page = FakePage::new(LoadState::Loaded);
    let mut prog = MemoryProgress::default();
    let ex = Canned::of(&["2.3|SIX|6 runs x", "1.1|FOUR|4 runs y", "Unknown|WICKET|z"]);

    let report = run(SCORECARD, &mut page, &ex, quick(), &mut prog).expect("scrape");

    assert_eq!(page.visited, [ball_by_ball_url(SCORECARD)]);
    assert_eq!(report.url, ball_by_ball_url(SCORECARD));
    let overs: Vec<&str> = report.records.iter().map(|r| r.over.as_str()).collect();
    assert_eq!(overs, ["1.1", "2.3", "Unknown"]);
    assert_eq!(report.raw_lines, ["1.1|FOUR|4 runs y", "2.3|SIX|6 runs x", "Unknown|WICKET|z"]);
    assert!(report.errors.is_empty());

    assert!(prog.lines.iter().any(|l| l.starts_with("Modified URL: ")));
    assert!(prog.lines.iter().any(|l| l == "Extracted 3 highlights"));
    assert!(prog.lines.iter().any(|l| l == "Highlights sorted by over number."));
    assert_eq!(prog.lines.last().map(String::as_str), Some("Done: 3 highlight(s)"));
}

#[test]
fn no_load_signal_waits_the_fallback_delay() {
    let mut page = FakePage::new(LoadState::NoSignal);
    let mut prog = MemoryProgress::default();
    let ex = Canned::of(&["1.1|FOUR|4 runs"]);

    let started = Instant::now();
    let report = run(SCORECARD, &mut page, &ex, quick(), &mut prog).expect("scrape");
    assert!(started.elapsed() >= quick().fallback_delay);
    assert_eq!(report.records.len(), 1);
}

#[test]
fn timeout_warns_but_still_extracts() {
    let mut page = FakePage::new(LoadState::TimedOut);
    let mut prog = MemoryProgress::default();
    let ex = Canned::of(&["1.1|FOUR|4 runs"]);

    let report = run(SCORECARD, &mut page, &ex, quick(), &mut prog).expect("scrape");
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(prog.warnings.len(), 1);
}

#[test]
fn nothing_found_is_a_warning() {
    let mut page = FakePage::new(LoadState::Loaded);
    let mut prog = MemoryProgress::default();

    let err = run(SCORECARD, &mut page, &Canned(Vec::new()), quick(), &mut prog).unwrap_err();
    assert!(matches!(err, ScrapeError::EmptyResult));
    assert!(err.is_warning());
    assert!(prog.warnings.iter().any(|w| w.starts_with("no highlights found")));
}

#[test]
fn only_errors_is_an_extraction_failure() {
    let mut page = FakePage::new(LoadState::Loaded);
    let mut prog = MemoryProgress::default();
    let ex = Canned(vec![encode_extraction_error("selectors broke")]);

    let err = run(SCORECARD, &mut page, &ex, quick(), &mut prog).unwrap_err();
    match err {
        ScrapeError::ExtractionFailure(msg) => assert_eq!(msg, "selectors broke"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(prog.warnings.iter().any(|w| w == "Error during extraction: selectors broke"));
}

#[test]
fn error_records_never_reach_the_report() {
    let mut page = FakePage::new(LoadState::Loaded);
    let mut prog = MemoryProgress::default();
    let err_line = encode_extraction_error("one container was odd");
    let ex = Canned(vec![s("4.4|SIX|6 runs"), err_line]);

    let report = run(SCORECARD, &mut page, &ex, quick(), &mut prog).expect("scrape");
    assert_eq!(report.records.len(), 1);
    assert!(report.records.iter().all(|r| !r.is_error()));
    assert_eq!(report.errors, ["one container was odd"]);
}

#[test]
fn second_scrape_is_refused_while_one_is_running() {
    let guard = InFlight::new();
    let ticket = guard.try_begin().expect("first ticket");
    assert!(guard.is_running());
    assert!(guard.try_begin().is_none());

    let mut page = FakePage::new(LoadState::Loaded);
    let mut prog = MemoryProgress::default();
    let ex = Canned::of(&["1.1|FOUR|4 runs"]);

    let err = run_guarded(&guard, SCORECARD, &mut page, &ex, quick(), &mut prog).unwrap_err();
    assert!(matches!(err, ScrapeError::Busy));
    assert!(page.visited.is_empty());

    drop(ticket);
    assert!(!guard.is_running());
    let report = run_guarded(&guard, SCORECARD, &mut page, &ex, quick(), &mut prog).expect("scrape");
    assert_eq!(report.records.len(), 1);
    assert!(!guard.is_running());
}

#[test]
fn saved_page_end_to_end() {
    let path = fixture_path();
    let mut source = source_for(&path);
    let mut prog = MemoryProgress::default();

    let report = run(&path, source.as_mut(), &BallByBall, quick(), &mut prog).expect("scrape");
    let overs: Vec<&str> = report.records.iter().map(|r| r.over.as_str()).collect();
    assert_eq!(overs, ["3.1", "5.2", "12.4", "18.1", "Unknown"]);
    assert_eq!(report.records[1].details, "J Smith b Jones (24 runs, 18 balls, 3x4, 1x6)");
}

#[test]
fn missing_file_is_an_io_error() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/does_not_exist.html");
    let mut source = source_for(path);
    let mut prog = MemoryProgress::default();

    let err = run(path, source.as_mut(), &BallByBall, quick(), &mut prog).unwrap_err();
    assert!(matches!(err, ScrapeError::Io { .. }));
    assert!(!err.is_warning());
}

fn s(v: &str) -> String {
    v.to_string()
}
