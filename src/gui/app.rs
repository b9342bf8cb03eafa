// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::config::{consts::APP_TITLE, state::AppState};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        state.status = s!("Idle");
        logf!("Init: {}", APP_TITLE);
        Self { state }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.state.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        eframe::egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::form::draw(ui, self);
        });

        // Drawn last so it sits above the form and swallows its input.
        crate::gui::components::notice::draw(ctx, self);
    }
}
