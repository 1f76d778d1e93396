// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! This module hosts the **page-specific scraping specifications**. Each spec
//! knows *where the highlights live in one site's markup* and *how to read
//! them out* as raw `over|KIND|details` lines.
//!
//! ## What lives here
//! - **Pure markup reading** over a page snapshot (no navigation, no waiting).
//! - **Selector choice**: the match centre renders styled-components class
//!   names (`BallDetailViewStyle__…-gx5g4w-N`), so selectors are tied to one
//!   build of that site and will need updating when it redeploys.
//! - **Failure encoding**: a spec never returns an error. If it can't run at
//!   all it returns the single line `ERROR|EXTRACTION|<message>`.
//!
//! ## What does **not** live here
//! - Fetching, load waiting and URL rewriting (`scrape`).
//! - Decoding, sorting, filtering (`highlights`, `table`).
//!
//! ## Conventions & invariants
//! - Output order is unspecified; callers always sort.
//! - Text is taken from element text with whitespace collapsed.
//! - Missing over numbers are emitted as `Unknown`, never dropped.
//!
//! ## Testing notes
//! - Specs are tested **offline** against captured fixtures (`tests/fixtures`).
pub mod ballbyball;

/// Anything that can turn one page snapshot into raw highlight lines.
pub trait Extractor {
    fn extract(&self, markup: &str) -> Vec<String>;
}
