// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use eframe::egui;

use crate::progress::Progress;

/// Worker-side progress: last line goes to the status bar, every line to the debug panel.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    debug: Arc<Mutex<Vec<String>>>,
    ctx: egui::Context,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, debug: Arc<Mutex<Vec<String>>>, ctx: egui::Context) -> Self {
        Self { status, debug, ctx }
    }

    fn push(&self, line: String) {
        if let Ok(mut status) = self.status.lock() {
            *status = line.clone();
        }
        if let Ok(mut debug) = self.debug.lock() {
            debug.push(line);
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, url: &str) {
        self.push(format!("Processing URL: {url}"));
    }
    fn log(&mut self, msg: &str) {
        self.push(s!(msg));
    }
    fn warn(&mut self, msg: &str) {
        self.push(format!("Warning: {msg}"));
    }
    fn finish(&mut self, highlights: usize) {
        if let Ok(mut debug) = self.debug.lock() {
            debug.push(format!("Done: {highlights} highlight(s)"));
        }
        self.ctx.request_repaint();
    }
}
