// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// `None` leaves the HTTP client's own default in place.
    pub timeout: Option<Duration>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub header: String,
    pub delimiter: char,
    pub default_file_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            header: s!(CSV_HEADER),
            delimiter: CSV_SEP,
            default_file_name: s!(DEFAULT_FILE),
        }
    }
}

impl ExportOptions {
    /// Apply the default `.csv` extension when the chosen name has none.
    /// An explicit extension (even a different one) is kept as typed.
    pub fn with_default_ext(path: &Path) -> PathBuf {
        if path.extension().is_some() {
            return path.to_path_buf();
        }
        let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(format!(".{CSV_EXT}"));
        path.with_file_name(name)
    }
}
