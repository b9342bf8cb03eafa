// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use tag_scrape::{
    config::consts::{APP_TITLE, WINDOW_H, WINDOW_W},
    gui, log, loge,
};

fn main() {
    log::init_file_logger();

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_W, WINDOW_H])
            .with_resizable(false),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        loge!("GUI failed: {}", e);
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
