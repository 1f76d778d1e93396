// src/highlights/over.rs
//! Ordering by over/ball token (`"12.4"`, `"7"`, `"Unknown"`, `"N/A"`).
//!
//! Two comparators on purpose:
//! - `compare_overs_sentinel_last` backs the first full-list sort after a
//!   scrape: ascending only, sentinels always at the bottom.
//! - `compare_overs` backs the clickable Over column: direction-aware, and
//!   sentinels follow the direction (last ascending, first descending).
//!
//! Tokens that aren't `major[.minor]` are ordered like sentinels so both
//! comparators stay total.

use std::cmp::Ordering;

use crate::config::consts::FIELD_SEP;

use super::record::HighlightRecord;

/// `"12.4"` → `(12, 4)`, `"7"` and `"7."` → `(7, 0)`. `None` for sentinels and junk.
pub fn parse_over(token: &str) -> Option<(u64, u64)> {
    let token = token.trim();
    let (major, minor) = match token.split_once('.') {
        Some((a, b)) => (a, Some(b)),
        None => (token, None),
    };
    let major = parse_digits(major)?;
    let minor = match minor {
        Some("") => 0,
        Some(m) => parse_digits(m)?,
        None => 0,
    };
    Some((major, minor))
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn cmp_keys(a: (u64, u64), b: (u64, u64), reverse: bool) -> Ordering {
    let ord = a.0.cmp(&b.0).then(a.1.cmp(&b.1));
    if reverse { ord.reverse() } else { ord }
}

/// Interactive column comparator. Sentinels last ascending, first descending.
pub fn compare_overs(a: &str, b: &str, reverse: bool) -> Ordering {
    match (parse_over(a), parse_over(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => if reverse { Ordering::Less } else { Ordering::Greater },
        (Some(_), None) => if reverse { Ordering::Greater } else { Ordering::Less },
        (Some(ka), Some(kb)) => cmp_keys(ka, kb, reverse),
    }
}

/// Initial-sort comparator. Ascending, sentinels unconditionally last.
pub fn compare_overs_sentinel_last(a: &str, b: &str) -> Ordering {
    match (parse_over(a), parse_over(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(ka), Some(kb)) => cmp_keys(ka, kb, false),
    }
}

/// Stable ascending sort of a whole scrape's records.
pub fn sort_highlights_by_over(mut records: Vec<HighlightRecord>) -> Vec<HighlightRecord> {
    records.sort_by(|a, b| compare_overs_sentinel_last(&a.over, &b.over));
    records
}

/// Same ordering applied to raw lines (the "raw highlights" text view).
pub fn sort_raw_by_over(mut raw: Vec<String>) -> Vec<String> {
    fn over_of(line: &str) -> &str {
        line.split(FIELD_SEP).next().unwrap_or("")
    }
    raw.sort_by(|a, b| compare_overs_sentinel_last(over_of(a), over_of(b)));
    raw
}
