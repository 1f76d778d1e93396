// src/format.rs
// Display-only transforms: bold batsman names, clipboard text.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::consts::{COPY_SEP, WICKET_PREFIX};
use crate::error::ScrapeError;
use crate::table::{DisplayRow, HighlightTable};

/// Leading batsman name, up to " (", " b ", " c ", " lbw ", " st " or the end.
static BATSMAN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^([A-Za-z\s\-']+?)(?:\s+\(|$|\s+b\s+|\s+c\s+|\s+lbw\s+|\s+st\s+)")
        .expect("batsman pattern is valid")
});

// Mathematical sans-serif bold.
const BOLD_UPPER_A: u32 = 0x1D5D4;
const BOLD_LOWER_A: u32 = 0x1D5EE;
const BOLD_DIGIT_0: u32 = 0x1D7EC;

pub fn bold_char(ch: char) -> char {
    let base = match ch {
        'A'..='Z' => BOLD_UPPER_A + (ch as u32 - 'A' as u32),
        'a'..='z' => BOLD_LOWER_A + (ch as u32 - 'a' as u32),
        '0'..='9' => BOLD_DIGIT_0 + (ch as u32 - '0' as u32),
        _ => return ch,
    };
    char::from_u32(base).unwrap_or(ch)
}

pub fn to_unicode_bold(text: &str) -> String {
    text.chars().map(bold_char).collect()
}

/// Name at the start of wicket details, trimmed. `None` when it doesn't look like one.
pub fn batsman_name(details: &str) -> Option<&str> {
    let caps = BATSMAN_RE.captures(details)?;
    let name = caps.get(1)?.as_str().trim();
    if name.is_empty() { None } else { Some(name) }
}

/// Bold (or restore) batsman names on wicket rows.
///
/// The original text is saved before the first change and is what we
/// restore from; the bold mapping is not reversed.
pub fn toggle_bold(rows: &mut [DisplayRow], enabled: bool) {
    for row in rows.iter_mut().filter(|r| r.is_wicket) {
        let original = s!(row.remember_original());

        if enabled {
            if let Some(name) = batsman_name(&original) {
                row.details = original.replacen(name, &to_unicode_bold(name), 1);
            }
        } else {
            row.details = original;
        }
    }
}

/// The three copied cells of a row, wicket details prefixed with "Wicket! ".
pub fn copy_fields(row: &DisplayRow) -> [String; 3] {
    let details = row.details.trim();
    let details = if row.is_wicket { join!(WICKET_PREFIX, details) } else { s!(details) };
    [s!(row.over.trim()), s!(row.glyph.trim()), details]
}

/// Visible rows as `over\tglyph\tdetails\n`. `None` when nothing is visible.
pub fn copy_text(rows: &[DisplayRow]) -> Option<String> {
    let mut out = s!();
    let mut any = false;

    for row in rows.iter().filter(|r| r.visible) {
        any = true;
        let [over, glyph, details] = copy_fields(row);
        out.push_str(&over);
        out.push(COPY_SEP);
        out.push_str(&glyph);
        out.push(COPY_SEP);
        out.push_str(&details);
        out.push('\n');
    }

    if any { Some(out) } else { None }
}

/// Wherever the copied text ends up (egui clipboard, stdout, a file).
pub trait ClipboardSink {
    fn write_text(&mut self, text: String) -> Result<(), ScrapeError>;
}

#[derive(Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Nothing visible; nothing written, nothing to announce.
    Skipped,
    Copied { rows: usize },
    Failed,
}

/// Copy the visible rows. A sink failure is logged, never raised.
pub fn copy_to_clipboard(table: &HighlightTable, sink: &mut dyn ClipboardSink) -> CopyOutcome {
    let Some(text) = table.copy_text() else {
        logd!("Copy: Clicked, but there's nothing visible to copy");
        return CopyOutcome::Skipped;
    };
    let rows = table.visible_count();

    match sink.write_text(text) {
        Ok(()) => {
            logf!("Copy: rows={}", rows);
            CopyOutcome::Copied { rows }
        }
        Err(e) => {
            loge!("Copy: {}", e);
            CopyOutcome::Failed
        }
    }
}
