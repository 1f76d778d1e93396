// src/csv.rs
use std::io::{self, Write};

use crate::config::options::{ExportFormat, ExportOptions};
use crate::format::copy_fields;
use crate::table::{HighlightTable, COLUMNS};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Export (visible rows only) ---------------- */

/// TSV is exactly the clipboard text; CSV quotes fields and may carry a header line.
pub fn to_export_string(table: &HighlightTable, export: &ExportOptions) -> String {
    if export.format == ExportFormat::Tsv && !export.include_headers {
        return table.copy_text().unwrap_or_default();
    }

    let sep = export.format.delim();
    let mut buf: Vec<u8> = Vec::new();

    if export.include_headers {
        let headers: Vec<&str> = COLUMNS.iter().map(|c| c.title()).collect();
        let _ = write_row(&mut buf, &headers, sep);
    }
    for row in table.visible_rows() {
        let _ = write_row(&mut buf, &copy_fields(row), sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
