// src/highlights/mod.rs
mod over;
mod record;

pub use over::{
    compare_overs, compare_overs_sentinel_last, parse_over, sort_highlights_by_over,
    sort_raw_by_over,
};
pub use record::{
    decode, decode_all, encode_extraction_error, format_stats, EventKind, HighlightRecord,
};
