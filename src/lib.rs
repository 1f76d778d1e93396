// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod format;
pub mod gui;
pub mod highlights;
pub mod progress;
pub mod scrape;
pub mod specs;
pub mod table;
