// src/file.rs

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::write_column;
use crate::error::ExportError;
use crate::scrape::ExtractedRecord;

/// Destination picked at export time. Never stored between runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportTarget {
    path: PathBuf,
}

impl ExportTarget {
    /// Wrap a user-chosen path, adding `.csv` when it has no extension.
    pub fn new(chosen: &Path) -> Self {
        Self { path: ExportOptions::with_default_ext(chosen) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write the record as a one-column CSV, overwriting any existing file.
/// The file handle is scoped to this call and closed on every path out.
pub fn write_export(
    export: &ExportOptions,
    target: &ExportTarget,
    record: &ExtractedRecord,
) -> Result<PathBuf, ExportError> {
    let path = target.path();
    let io_err = |source| ExportError::Io { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(io_err)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_column(&mut out, &export.header, record.items(), export.delimiter).map_err(io_err)?;
    out.flush().map_err(io_err)?;

    logf!("Export: OK rows={} → {}", record.len(), path.display());
    Ok(path.to_path_buf())
}

/// Read an exported file back into its column values (header dropped).
pub fn read_export(export: &ExportOptions, path: &Path) -> Result<Vec<String>, ExportError> {
    let text = fs::read_to_string(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut rows = crate::csv::parse_rows(&text, export.delimiter).into_iter();
    let _header = rows.next();
    Ok(rows
        .map(|mut r| if r.is_empty() { s!() } else { r.swap_remove(0) })
        .collect())
}
