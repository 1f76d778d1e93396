// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,poll,scrape}.

mod copy;    // src/gui/actions/copy.rs
mod scrape;  // src/gui/actions/scrape.rs

pub use copy::copy;
pub use scrape::{poll, scrape};
