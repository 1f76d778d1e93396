// src/gui/components/debug_log.rs

use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label(RichText::new("Debug log").strong());
        if ui.small_button("Clear").clicked() {
            if let Ok(mut d) = app.debug.lock() {
                d.clear();
            }
        }
    });

    let lines = app.debug.lock().map(|d| d.clone()).unwrap_or_default();

    egui::ScrollArea::vertical()
        .id_salt("debug_log_scroll")
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for line in &lines {
                let mut rt = RichText::new(line).monospace();
                if line.starts_with("Warning:") {
                    rt = rt.color(egui::Color32::from_rgb(0xF0, 0xD2, 0x3C));
                } else if line.starts_with("Error") {
                    rt = rt.color(egui::Color32::from_rgb(0xDC, 0x61, 0x49));
                }
                ui.label(rt);
            }
        });
}
