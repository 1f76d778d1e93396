// src/highlights/record.rs
//! Canonical highlight record and its `over|KIND|details` text encoding.
//!
//! Extractors hand us loosely shaped strings; `decode` is the one place that
//! turns them into records. It never fails: short strings get sentinel
//! fields, unknown kind tokens survive as `EventKind::Other`, and the
//! extractor's error string becomes an `EventKind::Error` record that callers
//! drop before building the table.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::{ERROR_KIND, ERROR_OVER, FIELD_SEP, MISSING_FIELD};

/// `R24 B18 4s3 6s1` → runs, balls, fours, sixes.
static STATS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"R([0-9]+)\sB([0-9]+)\s4s([0-9]+)\s6s([0-9]+)").expect("stats pattern is valid")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    Wicket,
    Six,
    Four,
    /// Extraction failed; `details` holds the message.
    Error,
    /// Token we don't recognise, kept verbatim (may be empty).
    Other(String),
}

impl EventKind {
    pub fn from_token(token: &str) -> Self {
        match token {
            "WICKET" => EventKind::Wicket,
            "SIX" => EventKind::Six,
            "FOUR" => EventKind::Four,
            other => EventKind::Other(s!(other)),
        }
    }

    pub fn token(&self) -> &str {
        match self {
            EventKind::Wicket => "WICKET",
            EventKind::Six => "SIX",
            EventKind::Four => "FOUR",
            EventKind::Error => ERROR_KIND,
            EventKind::Other(t) => t,
        }
    }

    /// Symbol shown in the Event column.
    pub fn glyph(&self) -> &str {
        match self {
            EventKind::Wicket => "🔴",
            EventKind::Six => "6️⃣",
            EventKind::Four => "4️⃣",
            other => other.token(),
        }
    }

    pub fn is_wicket(&self) -> bool {
        matches!(self, EventKind::Wicket)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HighlightRecord {
    pub over: String,
    pub kind: EventKind,
    pub details: String,
}

impl HighlightRecord {
    pub fn new(over: impl Into<String>, kind: EventKind, details: impl Into<String>) -> Self {
        Self { over: over.into(), kind, details: details.into() }
    }

    /// The pseudo-record an extractor emits when it blows up.
    pub fn extraction_error(msg: impl Into<String>) -> Self {
        Self { over: s!(ERROR_OVER), kind: EventKind::Error, details: msg.into() }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.kind, EventKind::Error)
    }

    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(self.over.len() + self.details.len() + 10);
        out.push_str(&self.over);
        out.push(FIELD_SEP);
        out.push_str(self.kind.token());
        out.push(FIELD_SEP);
        out.push_str(&self.details);
        out
    }
}

impl fmt::Display for HighlightRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Raw `ERROR|EXTRACTION|<message>` line.
pub fn encode_extraction_error(msg: &str) -> String {
    HighlightRecord::extraction_error(msg).encode()
}

/// Decode one raw highlight line. Never fails.
pub fn decode(raw: &str) -> HighlightRecord {
    let mut fields = raw.splitn(3, FIELD_SEP);
    let over = fields.next().unwrap_or("");
    let token = fields.next().unwrap_or("");
    let details = fields.next().unwrap_or("");

    if over == ERROR_OVER && token == ERROR_KIND {
        return HighlightRecord::extraction_error(details);
    }

    let over = if over.is_empty() { MISSING_FIELD } else { over };
    let details = format_stats(details);
    let details = if details.is_empty() { s!(MISSING_FIELD) } else { details };

    HighlightRecord { over: s!(over), kind: EventKind::from_token(token), details }
}

pub fn decode_all<S: AsRef<str>>(raw: &[S]) -> Vec<HighlightRecord> {
    raw.iter().map(|r| decode(r.as_ref())).collect()
}

/// Rewrite every `R<n> B<n> 4s<n> 6s<n>` run into words; everything else untouched.
/// Rewritten text never matches again, so decoding twice changes nothing.
pub fn format_stats(details: &str) -> String {
    STATS_RE
        .replace_all(details, "($1 runs, $2 balls, ${3}x4, ${4}x6)")
        .into_owned()
}
