// src/gui/components/notice.rs

use eframe::egui;

use crate::{
    gui::app::App,
    runner::NoticeKind,
};

fn title_color(kind: NoticeKind) -> egui::Color32 {
    match kind {
        NoticeKind::Warning => egui::Color32::from_rgb(220, 160, 30),
        NoticeKind::Error => egui::Color32::from_rgb(220, 30, 30),
        NoticeKind::Info => egui::Color32::from_rgb(60, 120, 220),
    }
}

/// Modal for the pending notice. The form stays disabled until it is dismissed.
pub fn draw(ctx: &egui::Context, app: &mut App) {
    let Some(notice) = app.state.notice.as_ref() else { return };

    let resp = egui::Modal::new(egui::Id::new("notice")).show(ctx, |ui| {
        ui.set_min_width(280.0);
        ui.label(
            egui::RichText::new(&notice.title)
                .color(title_color(notice.kind))
                .strong()
                .heading(),
        );
        ui.add_space(4.0);
        ui.label(notice.body.as_str());
        ui.add_space(8.0);
        ui.button("OK").clicked()
    });

    if resp.inner || resp.should_close() {
        logd!("UI: notice dismissed ({})", notice.title);
        app.state.notice = None;
    }
}
