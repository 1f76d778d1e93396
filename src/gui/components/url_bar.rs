// src/gui/components/url_bar.rs
//
// URL field, SCRAPE button, spinner and status line.

use eframe::egui::{self, widgets::Spinner};
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut go = false;

    ui.horizontal(|ui| {
        ui.label("Match URL:");
        let field_w = ui.available_width() - 110.0;
        let field = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.url_text)
                .hint_text("https://matchcentre.kncb.nl/match/…/scorecard")
                .desired_width(field_w)
                .font(egui::TextStyle::Monospace),
        );
        if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            go = true;
        }

        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;

        let button_scrape = ui.add_enabled(
            !app.running(),
            egui::Button::new(
                egui::RichText::new("SCRAPE")
                .color(black)
                .strong())
            .fill(red));

        if button_scrape.clicked() {
            go = true;
        }
    });

    if go && !app.running() {
        actions::scrape(app, ui.ctx());
    }

    ui.horizontal(|ui| {
        if app.running() {
            ui.add(Spinner::new().size(16.0));
        }

        let status = app.status.lock().map(|s| s.clone()).unwrap_or_default();
        ui.label(status);

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.checkbox(&mut app.state.gui.show_debug, "Debug log").changed() {
                logd!("UI: show_debug → {}", app.state.gui.show_debug);
            }
        });
    });
}
