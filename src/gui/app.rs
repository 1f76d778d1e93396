// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    error::ScrapeError,
    scrape::{should_autofetch, InFlight, ScrapeReport},
    table::HighlightTable,
};

pub fn run(options: eframe::NativeOptions, launch_url: Option<String>) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "KNCB Highlights",
        options,
        Box::new(move |cc| Ok(Box::new(App::new(AppState::default(), launch_url, &cc.egui_ctx)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // what the table shows; replaced on each successful scrape
    pub table: HighlightTable,
    pub raw_lines: Vec<String>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub debug: Arc<Mutex<Vec<String>>>,

    // one scrape at a time; result comes back over the channel
    pub in_flight: InFlight,
    pub pending: Option<Receiver<Result<ScrapeReport, ScrapeError>>>,
}

impl App {
    pub fn new(state: AppState, launch_url: Option<String>, ctx: &egui::Context) -> Self {
        let mut app = Self {
            state,
            table: HighlightTable::empty(),
            raw_lines: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            debug: Arc::new(Mutex::new(Vec::new())),
            in_flight: InFlight::new(),
            pending: None,
        };

        if let Some(url) = launch_url.map(|u| s!(u.trim())).filter(|u| !u.is_empty()) {
            app.state.gui.url_text = url.clone();
            if should_autofetch(&url) {
                logf!("Init: auto-fetch {}", url);
                super::actions::scrape(&mut app, ctx);
            } else {
                logd!("Init: launch URL is not a match page, waiting for the user: {}", url);
            }
        }

        logf!("Init: ready");
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn running(&self) -> bool { self.in_flight.is_running() || self.pending.is_some() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn debug_line<T: Into<String>>(&self, msg: T) {
        if let Ok(mut d) = self.debug.lock() {
            d.push(msg.into());
        }
    }

    #[inline]
    pub fn has_results(&self) -> bool { !self.table.is_empty() }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::actions::poll(self);

        if self.state.gui.show_debug {
            egui::TopBottomPanel::bottom("debug_log")
                .resizable(true)
                .default_height(140.0)
                .show(ctx, |ui| {
                    super::components::debug_log::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::url_bar::draw(ui, self);

            ui.separator();

            if self.has_results() {
                super::components::filter_bar::draw(ui, self);
                ui.separator();
            }

            super::components::data_table::draw(ui, self);
        });

        if self.running() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
