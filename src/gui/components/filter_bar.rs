// src/gui/components/filter_bar.rs
//
// Event toggles, bold names, raw view and Copy. Only drawn once there are results.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut copy_clicked = false;

    ui.horizontal(|ui| {
        let filter = &mut app.state.options.filter;
        let before = *filter;

        ui.label("Show:");
        ui.checkbox(&mut filter.wickets, "🔴 Wickets");
        ui.checkbox(&mut filter.fours, "4️⃣ Fours");
        ui.checkbox(&mut filter.sixes, "6️⃣ Sixes");

        if *filter != before {
            let filter = *filter;
            app.table.apply_filters(filter);
            logf!("UI: Filters → {:?} (visible={})", filter, app.table.visible_count());
        }

        ui.separator();

        let display = &mut app.state.options.display;
        if ui.checkbox(&mut display.bold_names, "Bold batsman").changed() {
            let on = display.bold_names;
            app.table.set_bold_names(on);
            logf!("UI: Bold names → {}", on);
        }

        ui.checkbox(&mut app.state.gui.show_raw, "Raw highlights");

        ui.separator();

        if ui.button("Copy").on_hover_text("Copy visible rows as tab-separated text").clicked() {
            copy_clicked = true;
        }
        ui.label(format!("{}/{} shown", app.table.visible_count(), app.table.len()));
    });

    if copy_clicked {
        actions::copy(app, ui.ctx());
    }
}
