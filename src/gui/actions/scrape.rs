// src/gui/actions/scrape.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    error::ScrapeError,
    gui::{app::App, progress::GuiProgress},
    scrape::{run as run_scrape, source_for, ScrapeReport},
    specs::ballbyball::BallByBall,
    table::HighlightTable,
};

/// Start a scrape on a worker thread. Refused while another one is pending.
pub fn scrape(app: &mut App, ctx: &egui::Context) {
    let url = s!(app.state.gui.url_text.trim());
    if url.is_empty() {
        app.status("Enter a match URL first");
        return;
    }

    let Some(ticket) = app.in_flight.try_begin() else {
        logd!("Scrape: Clicked while one is already running");
        app.status(ScrapeError::Busy.to_string());
        return;
    };

    app.state.options.fetch.url = url.clone();
    let wait = app.state.options.fetch.wait;

    if let Ok(mut d) = app.debug.lock() {
        d.clear();
    }

    let mut prog = GuiProgress::new(app.status.clone(), app.debug.clone(), ctx.clone());
    let ctx = ctx.clone();
    let (tx, rx) = mpsc::channel();
    app.pending = Some(rx);

    logf!("Scrape: Begin url={}", url);

    thread::spawn(move || {
        // Released when the worker is done, whatever happens.
        let _ticket = ticket;

        // → This is where the scrape happens ←
        let mut source = source_for(&url);
        let res = run_scrape(&url, source.as_mut(), &BallByBall, wait, &mut prog);

        if tx.send(res).is_err() {
            logd!("Scrape: UI went away before the result arrived");
        }
        ctx.request_repaint();
    });
}

/// Pick up a finished scrape, if any. Called every frame.
pub fn poll(app: &mut App) {
    let Some(res) = app.pending.as_ref().map(|rx| rx.try_recv()) else { return };

    match res {
        Ok(result) => {
            app.pending = None;
            apply(app, result);
        }
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => {
            app.pending = None;
            loge!("Scrape: worker stopped without a result");
            app.status("Error: scrape worker stopped unexpectedly");
        }
    }
}

fn apply(app: &mut App, result: Result<ScrapeReport, ScrapeError>) {
    match result {
        Ok(report) => {
            let opts = &app.state.options;
            app.table = HighlightTable::build(&report.records, opts.filter, opts.display);
            app.raw_lines = report.raw_lines;

            let n = app.table.len();
            logf!("Scrape: table rebuilt rows={} visible={}", n, app.table.visible_count());
            app.status(format!("Found {} highlight(s)", n));
        }
        // Previous table stays up.
        Err(e) if e.is_warning() => {
            app.status(format!("Warning: {e}"));
        }
        Err(e) => {
            app.debug_line(format!("Error: {e}"));
            app.status(format!("Error: {e}"));
        }
    }
}
