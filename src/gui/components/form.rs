// src/gui/components/form.rs

use eframe::egui;

use crate::gui::{actions, app::App};

const FIELD_W: f32 = 360.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let enabled = !app.state.form_locked();

    egui::Grid::new("scrape_form")
        .num_columns(2)
        .spacing([8.0, 8.0])
        .show(ui, |ui| {
            ui.label("URL:");
            ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut app.state.url).desired_width(FIELD_W),
            );
            ui.end_row();

            ui.label("Tag to scrape:");
            ui.add_enabled(
                enabled,
                egui::TextEdit::singleline(&mut app.state.tag).desired_width(FIELD_W),
            );
            ui.end_row();
        });

    ui.add_space(6.0);

    ui.horizontal(|ui| {
        if ui.add_enabled(enabled, egui::Button::new("Scrape")).clicked() {
            actions::scrape(app);
        }
        ui.label(format!("Status: {}", app.state.status));
    });
}
