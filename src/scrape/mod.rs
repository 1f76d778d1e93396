// src/scrape/mod.rs
mod pipeline;
mod source;

pub use pipeline::{
    ball_by_ball_url, run, run_guarded, should_autofetch, InFlight, InFlightTicket, ScrapeReport,
};
pub use source::{source_for, FilePage, HttpPage, LoadState, PageSource};
