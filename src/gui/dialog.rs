// src/gui/dialog.rs
use std::path::PathBuf;

use crate::{
    config::{consts::{CSV_EXT, CSV_FILTER_NAME}, options::ExportOptions},
    runner::SavePrompt,
};

/// Native "Save as" dialog filtered to CSV.
pub struct NativeSavePrompt;

impl SavePrompt for NativeSavePrompt {
    fn ask(&mut self, export: &ExportOptions) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Save as")
            .add_filter(CSV_FILTER_NAME, &[CSV_EXT])
            .set_file_name(&export.default_file_name)
            .save_file()
    }
}
