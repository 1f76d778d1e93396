// src/gui/components/mod.rs
pub mod data_table;
pub mod debug_log;
pub mod filter_bar;
pub mod url_bar;
