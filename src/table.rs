// src/table.rs
//! HighlightTable: the on-screen view of one scrape.
//!
//! Purpose:
//! - Turn decoded records into display rows (glyph, filter tag, saved text).
//! - Own the per-column sort state machine and re-sort from *current cell
//!   text*, the way a user sees it.
//! - Apply the three event filters by flipping row visibility; rows are
//!   never removed, so switching a filter back restores the previous order.
//!
//! Kept free of egui so it can be driven from tests and the CLI.

use std::cmp::Ordering;

use crate::config::options::{DisplayOptions, FilterOptions};
use crate::format;
use crate::highlights::{compare_overs, HighlightRecord};

/// Filter discriminator. `None` rows are always visible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventTag {
    Wicket,
    Four,
    Six,
    None,
}

impl EventTag {
    /// Wickets by kind; boundaries by what the commentary says.
    pub fn for_record(rec: &HighlightRecord) -> Self {
        if rec.kind.is_wicket() {
            EventTag::Wicket
        } else if rec.details.contains("6 runs") {
            EventTag::Six
        } else if rec.details.contains("4 runs") {
            EventTag::Four
        } else {
            EventTag::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventTag::Wicket => "wicket",
            EventTag::Four => "four",
            EventTag::Six => "six",
            EventTag::None => "",
        }
    }

    pub fn enabled_by(&self, filter: &FilterOptions) -> bool {
        match self {
            EventTag::Wicket => filter.wickets,
            EventTag::Four => filter.fours,
            EventTag::Six => filter.sixes,
            EventTag::None => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    Over,
    Event,
    Details,
}

pub const COLUMNS: [Column; 3] = [Column::Over, Column::Event, Column::Details];

impl Column {
    pub fn index(&self) -> usize {
        match self { Column::Over => 0, Column::Event => 1, Column::Details => 2 }
    }

    pub fn title(&self) -> &'static str {
        match self { Column::Over => "Over", Column::Event => "Event", Column::Details => "Details" }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "over" => Some(Column::Over),
            "event" => Some(Column::Event),
            "details" => Some(Column::Details),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    None,
    Asc,
    Desc,
}

impl SortDirection {
    /// Header click: none/desc → asc, asc → desc.
    pub fn next(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::None | SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn indicator(&self) -> &'static str {
        match self {
            SortDirection::None => "",
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRow {
    pub over: String,
    pub glyph: String,
    /// Text currently shown (may carry bold letters).
    pub details: String,
    /// Captured once, before the first bold pass.
    original_details: Option<String>,
    pub tag: EventTag,
    pub is_wicket: bool,
    pub visible: bool,
}

impl DisplayRow {
    pub fn from_record(rec: &HighlightRecord) -> Self {
        Self {
            over: rec.over.clone(),
            glyph: s!(rec.kind.glyph()),
            details: rec.details.clone(),
            original_details: None,
            tag: EventTag::for_record(rec),
            is_wicket: rec.kind.is_wicket(),
            visible: true,
        }
    }

    pub fn cell(&self, col: Column) -> &str {
        match col {
            Column::Over => &self.over,
            Column::Event => &self.glyph,
            Column::Details => &self.details,
        }
    }

    /// Save the unformatted details the first time we're asked; return them.
    pub fn remember_original(&mut self) -> &str {
        self.original_details.get_or_insert_with(|| self.details.clone()).as_str()
    }
}

#[derive(Clone, Debug, Default)]
pub struct HighlightTable {
    rows: Vec<DisplayRow>,
    sort: [SortDirection; 3],
}

impl HighlightTable {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rows for every real highlight; extraction-error records are skipped.
    pub fn from_records(records: &[HighlightRecord]) -> Self {
        let rows = records
            .iter()
            .filter(|r| !r.is_error())
            .map(DisplayRow::from_record)
            .collect();
        Self { rows, sort: Default::default() }
    }

    /// What a fresh scrape shows: Over ascending, filters and bold applied.
    pub fn build(records: &[HighlightRecord], filter: FilterOptions, display: DisplayOptions) -> Self {
        let mut table = Self::from_records(records);
        table.sort_by(Column::Over, SortDirection::Asc);
        table.apply_filters(filter);
        if display.bold_names {
            table.set_bold_names(true);
        }
        table
    }

    pub fn rows(&self) -> &[DisplayRow] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    pub fn visible_rows(&self) -> impl Iterator<Item = &DisplayRow> {
        self.rows.iter().filter(|r| r.visible)
    }

    pub fn visible_count(&self) -> usize {
        self.visible_rows().count()
    }

    pub fn sort_state(&self, col: Column) -> SortDirection {
        self.sort[col.index()]
    }

    /// Header click. Returns the direction the column ended up in.
    pub fn click_header(&mut self, col: Column) -> SortDirection {
        let dir = self.sort_state(col).next();
        self.sort_by(col, dir);
        dir
    }

    /// Sort by `col` in a forced direction; every other header resets.
    pub fn sort_by(&mut self, col: Column, dir: SortDirection) {
        self.sort = Default::default();
        self.sort[col.index()] = dir;

        let reverse = match dir {
            SortDirection::None => return,
            SortDirection::Asc => false,
            SortDirection::Desc => true,
        };

        self.rows.sort_by(|a, b| {
            let (ca, cb) = (a.cell(col), b.cell(col));
            match col {
                Column::Over => compare_overs(ca, cb, reverse),
                _ if reverse => cmp_text(cb, ca),
                _ => cmp_text(ca, cb),
            }
        });
    }

    /// Show/hide rows by tag. Idempotent.
    pub fn apply_filters(&mut self, filter: FilterOptions) {
        for row in &mut self.rows {
            row.visible = row.tag.enabled_by(&filter);
        }
    }

    pub fn set_bold_names(&mut self, enabled: bool) {
        format::toggle_bold(&mut self.rows, enabled);
    }

    /// Tab-separated text of the visible rows; `None` when nothing is visible.
    pub fn copy_text(&self) -> Option<String> {
        format::copy_text(&self.rows)
    }
}

/// Case-insensitive first, then raw text so the order stays total.
fn cmp_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
