// src/gui/actions/copy.rs
use eframe::egui;

use crate::{
    error::ScrapeError,
    format::{copy_to_clipboard, ClipboardSink, CopyOutcome},
    gui::app::App,
};

struct EguiClipboard<'a> {
    ctx: &'a egui::Context,
}

impl ClipboardSink for EguiClipboard<'_> {
    fn write_text(&mut self, text: String) -> Result<(), ScrapeError> {
        self.ctx.copy_text(text);
        Ok(())
    }
}

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let mut sink = EguiClipboard { ctx: ui_ctx };

    match copy_to_clipboard(&app.table, &mut sink) {
        CopyOutcome::Copied { .. } => app.status("Table copied to clipboard!"),
        // Nothing visible: silent. Failure: already in the debug log.
        CopyOutcome::Skipped | CopyOutcome::Failed => {}
    }
}
