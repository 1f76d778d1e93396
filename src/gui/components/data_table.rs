// src/gui/components/data_table.rs
//
// Draws the highlights table. Header click cycles the sort
// (None/Desc → Asc → Desc); hidden rows are simply not drawn.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode, Sense, CursorIcon};
use egui_extras::{Column as TableColumn, TableBuilder};
use crate::{
    gui::app::App,
    table::{Column, COLUMNS},
};

const WIDTHS: [f32; 3] = [60.0, 60.0, 600.0];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if !app.has_results() {
        ui.weak("No highlights yet. Paste a match URL and press SCRAPE.");
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    let avail_h = ui.available_height();
    let table_h = if app.state.gui.show_raw { avail_h * 0.6 } else { avail_h };

    ui.allocate_ui(egui::vec2(ui.available_width(), table_h), |ui| {
        inner_table(ui, app);
    });

    if app.state.gui.show_raw {
        ui.separator();
        raw_view(ui, app);
    }
}

fn inner_table(ui: &mut egui::Ui, app: &mut App) {
    let mut clicked: Option<Column> = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt("highlights_table");
    for (i, _) in COLUMNS.iter().enumerate() {
        let col = if i + 1 == COLUMNS.len() {
            TableColumn::remainder().clip(true)
        } else {
            TableColumn::initial(WIDTHS[i]).resizable(true).clip(true).at_least(40.0)
        };
        table = table.column(col);
    }

    let visible: Vec<usize> = app
        .table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, r)| r.visible)
        .map(|(i, _)| i)
        .collect();

    table
        .header(24.0, |mut header| {
            for col in COLUMNS {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    let label = join!(col.title(), " ", app.table.sort_state(col).indicator());
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                        ui.add(egui::Label::new(RichText::new(label.trim_end()).strong()).selectable(false));
                    });

                    let id = ui.id().with("colhdr").with(col.index());
                    let resp = ui
                        .interact(ui.max_rect(), id, Sense::click())
                        .on_hover_cursor(CursorIcon::PointingHand);
                    if resp.clicked() {
                        clicked = Some(col);
                    }
                });
            }
        })
        .body(|body| {
            body.rows(20.0, visible.len(), |mut row| {
                let Some(data) = visible.get(row.index()).and_then(|&ix| app.table.rows().get(ix)) else {
                    return;
                };
                for col in COLUMNS {
                    row.col(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        let mut rt = RichText::new(data.cell(col));
                        if data.is_wicket && col == Column::Details {
                            rt = rt.color(egui::Color32::from_rgb(0xDC, 0x61, 0x49));
                        }
                        if col == Column::Details {
                            ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                        } else {
                            ui.centered_and_justified(|ui| { ui.label(rt); });
                        }
                    });
                }
            });
        });

    if let Some(col) = clicked {
        let dir = app.table.click_header(col);
        logf!("UI: Sort {:?} → {:?}", col, dir);
    }
}

fn raw_view(ui: &mut egui::Ui, app: &mut App) {
    ui.label(RichText::new("Raw highlights").strong());
    let mut text = app.raw_lines.join("\n");
    egui::ScrollArea::vertical()
        .id_salt("raw_highlights_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut text)
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY)
                    .interactive(false),
            );
        });
}
